use crate::submission::values::SubmissionValues;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/submissions/{form_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub values: SubmissionValues,
}

/// What happened to the spreadsheet row of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetDelivery {
    /// The form has no spreadsheet layout.
    Skipped,
    Delivered,
    Failed(String),
}

/// Returned with `200 OK` once the chat webhook accepted the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub sheet: SheetDelivery,
}
