use crate::model::form::FormDefinition;

/// The form definitions loaded into one client session.
///
/// Filled once from the store at startup and then kept in step with every
/// successful save or delete. The owner passes it down to the views that need
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormCatalog {
    forms: Vec<FormDefinition>,
}

impl FormCatalog {
    pub fn new(forms: Vec<FormDefinition>) -> Self {
        Self { forms }
    }

    pub fn forms(&self) -> &[FormDefinition] {
        &self.forms
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn get(&self, form_id: &str) -> Option<&FormDefinition> {
        self.forms.iter().find(|f| f.id == form_id)
    }

    /// Replaces the definition with the same id, or adds it. The written
    /// definition moves to the end of the list.
    pub fn upsert(&mut self, form: FormDefinition) {
        self.forms.retain(|f| f.id != form.id);
        self.forms.push(form);
    }

    pub fn remove(&mut self, form_id: &str) -> Option<FormDefinition> {
        let index = self.forms.iter().position(|f| f.id == form_id)?;
        Some(self.forms.remove(index))
    }
}
