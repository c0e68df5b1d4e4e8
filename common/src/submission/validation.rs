use crate::model::form::FormDefinition;
use crate::submission::values::SubmissionValues;
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "이 필드는 필수입니다.";

/// Field-scoped validation messages, rendered inline under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(String::as_str)
    }

    pub fn clear_field(&mut self, field_id: &str) {
        self.0.remove(field_id);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Every field is required: a value that is missing or only whitespace fails.
pub fn validate(form: &FormDefinition, values: &SubmissionValues) -> ValidationErrors {
    let errors = form
        .fields
        .iter()
        .filter(|field| values.value_or_empty(&field.id).trim().is_empty())
        .map(|field| (field.id.clone(), REQUIRED_MESSAGE.to_string()))
        .collect();
    ValidationErrors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FormField;

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut note = FormField::blank();
        note.id = "note".into();
        let form = FormDefinition::skeleton("f", vec![FormField::applicant(), note]);
        let values: SubmissionValues =
            [("field_applicant_fixed", "bella.arena"), ("note", "   ")].into_iter().collect();

        let errors = validate(&form, &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("note"), Some(REQUIRED_MESSAGE));
    }
}
