//! Editing model behind the admin form builder.
//!
//! `FormBuilder` owns a working copy of one `FormDefinition` and applies the
//! builder's rules to it: the fixed requester field is always present and
//! first, fixed fields are read-only, and a definition is only handed out for
//! saving once it validates.

use crate::catalog::FormCatalog;
use crate::model::field::{FieldType, FormField, APPLICANT_FIELD_ID};
use crate::model::form::{FormDefinition, FormError};

/// A partial update to a field. `None` leaves the attribute untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldChange {
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub placeholder: Option<String>,
    pub options: Option<Vec<String>>,
}

impl FieldChange {
    pub fn label(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Self::default() }
    }

    pub fn field_type(field_type: FieldType) -> Self {
        Self { field_type: Some(field_type), ..Self::default() }
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self { placeholder: Some(placeholder.into()), ..Self::default() }
    }

    pub fn options(options: Vec<String>) -> Self {
        Self { options: Some(options), ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBuilder {
    form: FormDefinition,
}

impl FormBuilder {
    /// Opens `form_id` for editing.
    ///
    /// An existing definition is returned with the requester field injected in
    /// front when it predates the fixed-field rule. An unknown id yields a fresh
    /// skeleton holding only the requester field.
    pub fn load(form_id: &str, catalog: &FormCatalog) -> Self {
        let form = match catalog.get(form_id) {
            Some(existing) => {
                let mut form = existing.clone();
                if form.field(APPLICANT_FIELD_ID).is_none() {
                    form.fields.insert(0, FormField::applicant());
                }
                form
            }
            None => FormDefinition::skeleton(form_id, vec![FormField::applicant()]),
        };
        Self { form }
    }

    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Handler accounts never contain whitespace, so it is stripped as typed.
    pub fn set_handlers(&mut self, handlers: &str) {
        self.form.handler_ldap = handlers.chars().filter(|c| !c.is_whitespace()).collect();
    }

    /// Appends a blank single-line text field and returns its id.
    pub fn add_field(&mut self) -> String {
        let field = FormField::blank();
        let id = field.id.clone();
        self.form.fields.push(field);
        id
    }

    /// Merges `change` into the field with `field_id`.
    ///
    /// Returns `false` without touching anything when no field matches or the
    /// field is fixed.
    pub fn update_field(&mut self, field_id: &str, change: FieldChange) -> bool {
        let Some(field) = self.form.fields.iter_mut().find(|f| f.id == field_id) else {
            return false;
        };
        if field.is_fixed {
            return false;
        }
        if let Some(field_type) = change.field_type {
            field.set_type(field_type);
        }
        if let Some(label) = change.label {
            field.label = label;
        }
        if let Some(placeholder) = change.placeholder {
            field.placeholder = Some(placeholder);
        }
        if let Some(options) = change.options {
            field.options = Some(options);
        }
        true
    }

    /// Removes the field unless it is fixed. Returns whether a field was removed.
    pub fn remove_field(&mut self, field_id: &str) -> bool {
        match self.form.fields.iter().position(|f| f.id == field_id) {
            Some(index) if !self.form.fields[index].is_fixed => {
                self.form.fields.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Returns the definition to upsert, or the reason it cannot be saved.
    pub fn save(&self) -> Result<FormDefinition, FormError> {
        self.form.validate()?;
        Ok(self.form.clone())
    }
}
