//! Payloads for the two submission destinations.
//!
//! The primary destination is the team-chat webhook, which turns every request
//! into a task for the form's handlers. The secondary destination appends a row
//! to a spreadsheet, and only for the handful of forms listed in
//! [`SHEET_LAYOUTS`].

use crate::model::form::FormDefinition;
use crate::submission::values::SubmissionValues;
use serde::{Deserialize, Serialize};

/// Shown in the chat message for a field left without a value.
pub const NO_INFO: &str = "정보 없음";

/// JSON body of the team-chat webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryPayload {
    pub text: String,
    pub task: TaskAssignment,
    pub expire_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub template_name: String,
    pub assignees: Vec<String>,
}

/// Row appended by the spreadsheet web app. Sent JSON-encoded inside the
/// `payload` field of a url-encoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetPayload {
    pub sheet: String,
    pub title: String,
    pub values: Vec<String>,
}

/// Which sheet a known form appends to, and the labels of the fields that make
/// up a row, in column order.
#[derive(Debug, Clone, Copy)]
pub struct SheetLayout {
    pub form_name: &'static str,
    pub sheet: &'static str,
    pub labels: &'static [&'static str],
}

/// Matched against form names and field labels by exact text. Renaming a form
/// or one of these labels in the builder silently breaks its row.
pub const SHEET_LAYOUTS: &[SheetLayout] = &[
    SheetLayout {
        form_name: "방문자 등록",
        sheet: "visitors",
        labels: &["신청자 이름", "날짜 및 시간", "방문자 이름", "방문자 소속", "총 방문자 수"],
    },
    SheetLayout {
        form_name: "임시 사원증 신청",
        sheet: "temp_badge",
        labels: &["신청자 이름", "사원증이 필요한 날짜"],
    },
];

/// Builds the chat message: a `#` title line, then one `* label: value` bullet
/// per field, plus the assignees parsed from the form's handler list.
pub fn build_primary_payload(form: &FormDefinition, values: &SubmissionValues) -> PrimaryPayload {
    let bullets = form
        .fields
        .iter()
        .map(|field| {
            let value = match values.value_or_empty(&field.id) {
                "" => NO_INFO,
                value => value,
            };
            format!("* {}: {}", field.label, value)
        })
        .collect::<Vec<_>>()
        .join("\n");

    PrimaryPayload {
        text: format!("# {}\n\n{}", form.name, bullets.trim()),
        task: TaskAssignment {
            template_name: String::new(),
            assignees: form.assignees(),
        },
        expire_type: None,
    }
}

/// Builds the spreadsheet row when the form is one of [`SHEET_LAYOUTS`].
///
/// Labels with no matching field contribute an empty string, so the column
/// count stays fixed.
pub fn build_sheet_payload(form: &FormDefinition, values: &SubmissionValues) -> Option<SheetPayload> {
    let title = form.name.trim();
    let layout = SHEET_LAYOUTS.iter().find(|layout| layout.form_name == title)?;

    let row = layout
        .labels
        .iter()
        .map(|label| {
            form.field_by_label(label)
                .map(|field| values.value_or_empty(&field.id).to_string())
                .unwrap_or_default()
        })
        .collect();

    Some(SheetPayload {
        sheet: layout.sheet.to_string(),
        title: title.to_string(),
        values: row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{FieldType, FormField};

    fn field(id: &str, label: &str, field_type: FieldType) -> FormField {
        FormField {
            id: id.into(),
            label: label.into(),
            field_type,
            options: None,
            placeholder: None,
            is_fixed: false,
        }
    }

    fn visitor_form() -> FormDefinition {
        FormDefinition {
            name: "방문자 등록".into(),
            description: "외부 방문자 출입 등록".into(),
            handler_ldap: "bella.arena, jaye.sung,".into(),
            ..FormDefinition::skeleton(
                "form_visitors",
                vec![
                    field("a", "신청자 이름", FieldType::Text),
                    field("b", "날짜 및 시간", FieldType::Datetime),
                    field("c", "방문자 이름", FieldType::Text),
                    field("d", "방문자 소속", FieldType::Text),
                    field("e", "총 방문자 수", FieldType::Text),
                ],
            )
        }
    }

    fn filled() -> SubmissionValues {
        [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D"), ("e", "E")]
            .into_iter()
            .collect()
    }

    #[test]
    fn visitor_form_maps_labels_to_row_in_order() {
        let payload = build_sheet_payload(&visitor_form(), &filled()).unwrap();
        assert_eq!(payload.sheet, "visitors");
        assert_eq!(payload.title, "방문자 등록");
        assert_eq!(payload.values, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn field_order_in_form_does_not_change_row_order() {
        let mut form = visitor_form();
        form.fields.reverse();
        let payload = build_sheet_payload(&form, &filled()).unwrap();
        assert_eq!(payload.values, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn temp_badge_form_uses_its_own_sheet() {
        let form = FormDefinition {
            name: "임시 사원증 신청".into(),
            ..FormDefinition::skeleton(
                "form_badge",
                vec![
                    field("who", "신청자 이름", FieldType::Text),
                    field("when", "사원증이 필요한 날짜", FieldType::Date),
                ],
            )
        };
        let values = [("who", "정하늘"), ("when", "2026-10-20")].into_iter().collect();
        let payload = build_sheet_payload(&form, &values).unwrap();
        assert_eq!(payload.sheet, "temp_badge");
        assert_eq!(payload.values, vec!["정하늘", "2026-10-20"]);
    }

    #[test]
    fn other_form_names_produce_no_sheet_payload() {
        let mut form = visitor_form();
        form.name = "방문자 등록 (신규)".into();
        assert_eq!(build_sheet_payload(&form, &filled()), None);
    }

    #[test]
    fn renamed_label_leaves_its_column_empty() {
        // A relabelled field drops out of the row.
        let mut form = visitor_form();
        form.fields[2].label = "방문객 이름".into();
        let payload = build_sheet_payload(&form, &filled()).unwrap();
        assert_eq!(payload.values, vec!["A", "B", "", "D", "E"]);
    }

    #[test]
    fn primary_text_lists_every_field_with_placeholder_for_blanks() {
        let mut values = filled();
        values.set("e", "");
        let payload = build_primary_payload(&visitor_form(), &values);

        assert_eq!(
            payload.text,
            "# 방문자 등록\n\n\
             * 신청자 이름: A\n\
             * 날짜 및 시간: B\n\
             * 방문자 이름: C\n\
             * 방문자 소속: D\n\
             * 총 방문자 수: 정보 없음"
        );
        assert_eq!(payload.task.assignees, vec!["bella.arena", "jaye.sung"]);
    }

    #[test]
    fn primary_payload_wire_shape() {
        let payload = build_primary_payload(&visitor_form(), &filled());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["task"]["template_name"], "");
        assert!(json["expire_type"].is_null());
        assert!(json.as_object().unwrap().contains_key("expire_type"));
    }
}
