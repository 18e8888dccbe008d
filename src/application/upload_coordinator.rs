use std::path::PathBuf;

use bytes::Bytes;
use tracing::{error, info};

use crate::{
    api::ApiClient,
    application::StatusDisplay,
    domain::{AppError, FilePayload, Submission, SubmissionForm, SubmissionOutcome},
    utils::display_name,
};

#[derive(Clone)]
pub struct UploadCoordinator {
    api_client: ApiClient,
}

impl UploadCoordinator {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// Runs on the submit event itself, before any await point.
    pub fn begin(&self, display: &mut impl StatusDisplay) {
        display.show_pending();
    }

    pub async fn choose_file(&self) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_title("Select contact list")
            .add_filter("Contact lists", &["csv", "xlsx", "txt", "pdf"])
            .add_filter("All files", &["*"])
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Send one submission and fold every result into an outcome.
    /// Transport errors are logged here and never retried.
    pub async fn submit(&self, form: SubmissionForm) -> SubmissionOutcome {
        match self.send(form).await {
            Ok(body) => SubmissionOutcome::ok(body),
            Err(e) => {
                error!(error = %e, "Failed to send submission");
                SubmissionOutcome::network_error()
            }
        }
    }

    async fn send(&self, form: SubmissionForm) -> Result<String, AppError> {
        let submission = load_submission(form).await?;

        info!(
            file = submission.file.as_ref().map(|f| f.file_name.as_str()).unwrap_or("<none>"),
            message_len = submission.message.len(),
            "Submitting upload"
        );

        self.api_client
            .upload(submission)
            .await
            .map_err(|e| AppError::Api(e.to_string()))
    }
}

async fn load_submission(form: SubmissionForm) -> Result<Submission, AppError> {
    let file = match form.file {
        Some(path) => {
            let contents = tokio::fs::read(&path)
                .await
                .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;

            Some(FilePayload {
                file_name: display_name(&path),
                contents: Bytes::from(contents),
            })
        }
        None => None,
    };

    Ok(Submission {
        file,
        message: form.message,
    })
}
