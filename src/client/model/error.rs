use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Failure of a thumbnail upload. Surfaced to the caller instead of being
/// discarded; a failed upload must never write into the form draft.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum UploadError {
    #[error("failed to read file: {0}")]
    Read(String),
    #[error("failed to prepare upload: {0}")]
    Prepare(String),
    #[error("failed to send upload: {0}")]
    Transport(String),
    #[error("upload rejected ({status}): {message}")]
    Rejected { status: u64, message: String },
    #[error("failed to parse upload response: {0}")]
    Parse(String),
}
