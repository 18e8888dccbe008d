pub mod error;
pub mod model;

pub use error::AppError;
pub use model::{FilePayload, StatusPhase, Submission, SubmissionForm, SubmissionOutcome};
