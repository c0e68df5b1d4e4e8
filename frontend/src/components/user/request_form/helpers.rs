use common::submission::SubmissionStatus;

pub const ERROR_STATUS_LINE: &str = "요청 제출 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
pub const SUCCESS_STATUS_LINE: &str = "요청이 성공적으로 전송되었습니다.";

pub fn button_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Idle => "요청 보내기",
        SubmissionStatus::Submitting => "제출 중...",
        SubmissionStatus::Success => "성공적으로 제출되었습니다!",
        SubmissionStatus::Error => "다시 시도",
    }
}

/// The line under the submit button, with its CSS class.
pub fn status_line(status: SubmissionStatus) -> Option<(&'static str, &'static str)> {
    match status {
        SubmissionStatus::Error => Some(("status-error", ERROR_STATUS_LINE)),
        SubmissionStatus::Success => Some(("status-success", SUCCESS_STATUS_LINE)),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}
