use std::path::PathBuf;

use bytes::Bytes;

/// Text shown when a submission never reaches a response.
pub const FAILURE_MESSAGE: &str = "Failed to send messages.";

/// Form state captured synchronously when the user submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub file: Option<PathBuf>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub file_name: String,
    pub contents: Bytes,
}

/// What actually goes over the wire for one submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub file: Option<FilePayload>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Ok,
    NetworkError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub kind: OutcomeKind,
    pub text: String,
}

impl SubmissionOutcome {
    /// Any completed HTTP response, whatever its status code.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Ok,
            text: text.into(),
        }
    }

    pub fn network_error() -> Self {
        Self {
            kind: OutcomeKind::NetworkError,
            text: FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPhase {
    #[default]
    Idle,
    Pending,
    Resolved,
}
