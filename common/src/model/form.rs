use crate::model::field::FormField;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// An administrator-authored request type: a name, a description, the handlers
/// that receive submissions, and the ordered fields users fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated LDAP accounts of the people the request is assigned to.
    #[serde(rename = "handlerLdap", default)]
    pub handler_ldap: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("양식 이름을 입력해주세요.")]
    BlankName,
    #[error("field #{index} has an empty id")]
    BlankFieldId { index: usize },
    #[error("field id `{0}` is used more than once")]
    DuplicateFieldId(String),
}

impl FormDefinition {
    /// An empty definition holding only the given fields.
    pub fn skeleton(id: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            handler_ldap: String::new(),
            fields,
        }
    }

    /// Generates an id for a form that has not been saved yet.
    pub fn new_id() -> String {
        format!("form_{}", uuid::Uuid::new_v4().simple())
    }

    /// Checks the invariants a definition must hold before it is stored.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::BlankName);
        }
        let mut seen = HashSet::new();
        for (index, field) in self.fields.iter().enumerate() {
            if field.id.trim().is_empty() {
                return Err(FormError::BlankFieldId { index });
            }
            if !seen.insert(field.id.as_str()) {
                return Err(FormError::DuplicateFieldId(field.id.clone()));
            }
        }
        Ok(())
    }

    /// Assignee accounts parsed from `handler_ldap`: split on commas, trimmed,
    /// empty entries dropped.
    pub fn assignees(&self) -> Vec<String> {
        self.handler_ldap
            .split(',')
            .map(str::trim)
            .filter(|ldap| !ldap.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// First field whose trimmed label equals the trimmed `label`.
    pub fn field_by_label(&self, label: &str) -> Option<&FormField> {
        let label = label.trim();
        self.fields.iter().find(|f| f.label.trim() == label)
    }
}
