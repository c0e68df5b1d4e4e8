use serde::{Deserialize, Serialize};

/// Id of the mandatory requester field every builder-managed form starts with.
pub const APPLICANT_FIELD_ID: &str = "field_applicant_fixed";

/// The closed set of input kinds a form field can have.
///
/// The wire names match the documents already stored in the `forms` collection,
/// so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Text,
    Textarea,
    Date,
    Datetime,
    Dropdown,
}

impl FieldType {
    /// Every variant, in the order the builder lists them.
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Date,
        FieldType::Datetime,
        FieldType::Dropdown,
    ];

    /// Label shown in the builder's type selector.
    pub fn display_name(self) -> &'static str {
        match self {
            FieldType::Text => "텍스트",
            FieldType::Textarea => "여러 줄 텍스트",
            FieldType::Date => "날짜",
            FieldType::Datetime => "날짜 및 시간",
            FieldType::Dropdown => "드롭다운",
        }
    }

    /// Stable identifier used as the `<option value>` in the type selector.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Textarea => "TEXTAREA",
            FieldType::Date => "DATE",
            FieldType::Datetime => "DATETIME",
            FieldType::Dropdown => "DROPDOWN",
        }
    }

    pub fn parse(value: &str) -> Option<FieldType> {
        FieldType::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Only free-text inputs carry a placeholder hint in the builder.
    pub fn accepts_placeholder(self) -> bool {
        matches!(self, FieldType::Text | FieldType::Textarea)
    }
}

/// One input of a form definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Fixed fields cannot be removed, retyped or relabelled in the builder.
    #[serde(rename = "isFixed", default)]
    pub is_fixed: bool,
}

impl FormField {
    /// The requester field injected as the first field of every form.
    pub fn applicant() -> Self {
        Self {
            id: APPLICANT_FIELD_ID.to_string(),
            label: "신청자".to_string(),
            field_type: FieldType::Text,
            options: None,
            placeholder: Some("LDAP을 입력하세요(bella.arena)".to_string()),
            is_fixed: true,
        }
    }

    /// A blank single-line text field with a freshly generated id.
    pub fn blank() -> Self {
        Self {
            id: format!("field_{}", uuid::Uuid::new_v4().simple()),
            label: String::new(),
            field_type: FieldType::Text,
            options: None,
            placeholder: Some(String::new()),
            is_fixed: false,
        }
    }

    /// Switches the field type, keeping `options` consistent with it:
    /// a dropdown always has a list, every other type has none.
    pub fn set_type(&mut self, field_type: FieldType) {
        self.options = match (self.field_type, field_type) {
            (FieldType::Dropdown, FieldType::Dropdown) => {
                Some(self.options.take().unwrap_or_default())
            }
            (_, FieldType::Dropdown) => Some(Vec::new()),
            _ => None,
        };
        self.field_type = field_type;
    }

    /// Options rendered back into the newline-separated editing form.
    pub fn options_text(&self) -> String {
        self.options.as_deref().unwrap_or_default().join("\n")
    }
}

/// Splits newline-separated option text into an ordered option list.
///
/// Blank lines are kept as empty options.
pub fn parse_options(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_to_dropdown_starts_with_empty_options() {
        let mut field = FormField::blank();
        field.set_type(FieldType::Dropdown);
        assert_eq!(field.options, Some(Vec::new()));
    }

    #[test]
    fn dropdown_to_text_clears_options() {
        let mut field = FormField::blank();
        field.set_type(FieldType::Dropdown);
        field.options = Some(vec!["A".into(), "B".into()]);
        field.set_type(FieldType::Date);
        assert_eq!(field.options, None);
        assert_eq!(field.field_type, FieldType::Date);
    }

    #[test]
    fn dropdown_to_dropdown_keeps_options() {
        let mut field = FormField::blank();
        field.set_type(FieldType::Dropdown);
        field.options = Some(vec!["A".into()]);
        field.set_type(FieldType::Dropdown);
        assert_eq!(field.options, Some(vec!["A".to_string()]));
    }

    #[test]
    fn blank_option_lines_are_preserved() {
        // Blank lines survive as empty options; whether they should is still open.
        assert_eq!(parse_options("A\n\nB\n"), vec!["A", "", "B", ""]);
    }

    #[test]
    fn options_text_round_trips_through_parse() {
        let mut field = FormField::blank();
        field.set_type(FieldType::Dropdown);
        field.options = Some(parse_options("회의실 A\n회의실 B"));
        assert_eq!(field.options_text(), "회의실 A\n회의실 B");
    }

    #[test]
    fn wire_format_matches_stored_documents() {
        let json = serde_json::to_value(FormField::applicant()).unwrap();
        assert_eq!(json["type"], "TEXT");
        assert_eq!(json["isFixed"], true);
        assert!(json.get("options").is_none());

        let legacy: FormField =
            serde_json::from_str(r#"{"id":"f1","label":"메모","type":"TEXTAREA"}"#).unwrap();
        assert!(!legacy.is_fixed);
        assert_eq!(legacy.field_type, FieldType::Textarea);
    }

    #[test]
    fn parse_accepts_only_known_names() {
        assert_eq!(FieldType::parse("DATETIME"), Some(FieldType::Datetime));
        assert_eq!(FieldType::parse("datetime"), None);
    }

    #[test]
    fn blank_fields_get_distinct_ids() {
        assert_ne!(FormField::blank().id, FormField::blank().id);
    }
}
