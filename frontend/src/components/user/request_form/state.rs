use common::submission::SubmissionSession;

pub struct RequestFormComponent {
    pub session: SubmissionSession,
}

impl RequestFormComponent {
    pub fn new() -> Self {
        Self {
            session: SubmissionSession::new(),
        }
    }
}
