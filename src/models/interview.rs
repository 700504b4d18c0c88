use serde::Serialize;

/// One entry of the stamp rally log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewEvent {
    pub interviewer: Option<String>,
    pub interviewee: Option<String>,
    /// True when the entry carries a date.
    pub done: bool,
}

impl InterviewEvent {
    pub fn new(interviewer: &str, interviewee: &str, done: bool) -> Self {
        Self {
            interviewer: Some(interviewer.to_string()),
            interviewee: Some(interviewee.to_string()),
            done,
        }
    }
}
