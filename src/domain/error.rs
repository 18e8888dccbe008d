use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Failed to read selected file: {0}")]
    Io(String),

    #[error("Upload request failed: {0}")]
    Api(String),
}
