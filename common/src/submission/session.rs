use crate::model::form::FormDefinition;
use crate::requests::SubmitRequest;
use crate::submission::validation::{validate, ValidationErrors};
use crate::submission::values::SubmissionValues;
use thiserror::Error;

/// `Idle → Submitting → {Success, Error}`. `Error` may submit again;
/// `Success` is final for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Why a submit attempt did not produce a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("this request was already submitted")]
    AlreadySubmitted,
    #[error("{0} required field(s) are empty")]
    Invalid(usize),
}

/// State of one user filling in one form.
///
/// Created when the request view opens and dropped when the user navigates
/// away, which is also the only way out of `Success`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionSession {
    values: SubmissionValues,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

impl SubmissionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &SubmissionValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.status, SubmissionStatus::Idle | SubmissionStatus::Error)
    }

    /// Records a new value and drops any error shown for that field.
    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) {
        self.values.set(field_id, value);
        self.errors.clear_field(field_id);
    }

    /// Validates the current values and, when they pass, moves to `Submitting`
    /// and returns the request to send. Nothing is sent on any error.
    pub fn begin_submit(&mut self, form: &FormDefinition) -> Result<SubmitRequest, SubmitBlocked> {
        match self.status {
            SubmissionStatus::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionStatus::Success => return Err(SubmitBlocked::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Error => {}
        }

        self.errors = validate(form, &self.values);
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.len()));
        }

        self.status = SubmissionStatus::Submitting;
        Ok(SubmitRequest {
            values: self.values.clone(),
        })
    }

    /// Applies the primary destination's outcome. Success clears the values;
    /// failure keeps them so the user can retry without retyping.
    pub fn finish(&mut self, primary_succeeded: bool) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        if primary_succeeded {
            self.values.clear();
            self.status = SubmissionStatus::Success;
        } else {
            self.status = SubmissionStatus::Error;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{FormField, APPLICANT_FIELD_ID};

    fn form() -> FormDefinition {
        let mut purpose = FormField::blank();
        purpose.id = "purpose".into();
        purpose.label = "요청 내용".into();
        FormDefinition {
            name: "시설 수리 요청".into(),
            ..FormDefinition::skeleton("form_fix", vec![FormField::applicant(), purpose])
        }
    }

    fn filled_session() -> SubmissionSession {
        let mut session = SubmissionSession::new();
        session.set_value(APPLICANT_FIELD_ID, "bella.arena");
        session.set_value("purpose", "3층 회의실 조명 교체");
        session
    }

    #[test]
    fn blank_required_field_blocks_with_one_error() {
        let mut session = SubmissionSession::new();
        session.set_value(APPLICANT_FIELD_ID, "bella.arena");

        assert_eq!(session.begin_submit(&form()), Err(SubmitBlocked::Invalid(1)));
        assert_eq!(session.errors().len(), 1);
        assert!(session.errors().get("purpose").is_some());
        assert_eq!(session.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut session = SubmissionSession::new();
        let _ = session.begin_submit(&form());
        assert_eq!(session.errors().len(), 2);

        session.set_value("purpose", "x");
        assert!(session.errors().get("purpose").is_none());
        assert!(session.errors().get(APPLICANT_FIELD_ID).is_some());
    }

    #[test]
    fn valid_values_move_to_submitting_and_carry_values() {
        let mut session = filled_session();
        let request = session.begin_submit(&form()).unwrap();
        assert_eq!(session.status(), SubmissionStatus::Submitting);
        assert_eq!(request.values.get("purpose"), Some("3층 회의실 조명 교체"));
        assert_eq!(session.begin_submit(&form()), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn success_clears_values_and_is_terminal() {
        let mut session = filled_session();
        session.begin_submit(&form()).unwrap();
        session.finish(true);

        assert_eq!(session.status(), SubmissionStatus::Success);
        assert!(session.values().is_empty());
        assert!(!session.can_submit());
        assert_eq!(session.begin_submit(&form()), Err(SubmitBlocked::AlreadySubmitted));
    }

    #[test]
    fn failure_keeps_values_and_allows_retry() {
        let mut session = filled_session();
        session.begin_submit(&form()).unwrap();
        session.finish(false);

        assert_eq!(session.status(), SubmissionStatus::Error);
        assert_eq!(session.values().get(APPLICANT_FIELD_ID), Some("bella.arena"));
        assert!(session.can_submit());
        assert!(session.begin_submit(&form()).is_ok());
    }

    #[test]
    fn finish_outside_submitting_is_ignored() {
        let mut session = filled_session();
        session.finish(true);
        assert_eq!(session.status(), SubmissionStatus::Idle);
        assert!(!session.values().is_empty());
    }
}
