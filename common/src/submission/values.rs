use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field id → entered value for one form being filled in.
///
/// Lives only as long as the session that collects it; it is forwarded to the
/// webhooks and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionValues(BTreeMap<String, String>);

impl SubmissionValues {
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(String::as_str)
    }

    /// The entered value, or `""` when the field was never touched.
    pub fn value_or_empty(&self, field_id: &str) -> &str {
        self.get(field_id).unwrap_or_default()
    }

    pub fn set(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field_id.into(), value.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmissionValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
