use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use super::models::ApiConfig;
use crate::domain::Submission;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid upload URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Two parts, always: `file` then `message`.
    /// With nothing selected the `file` part is sent empty and without a filename.
    fn build_form(submission: Submission) -> Form {
        let file_part = match submission.file {
            Some(payload) => {
                let length = payload.contents.len() as u64;
                Part::stream_with_length(payload.contents, length).file_name(payload.file_name)
            }
            None => Part::text(""),
        };

        Form::new()
            .part("file", file_part)
            .text("message", submission.message)
    }

    /// POST the submission to the upload endpoint.
    /// Returns the response body as text for every HTTP status; only
    /// transport failures are errors.
    pub async fn upload(&self, submission: Submission) -> Result<String> {
        let url = self.config.upload_url()?;
        debug!(%url, "posting multipart upload");

        let response = self
            .http
            .post(url)
            .multipart(Self::build_form(submission))
            .send()
            .await?;

        info!(status = %response.status(), "upload response received");

        Ok(response.text().await?)
    }
}
