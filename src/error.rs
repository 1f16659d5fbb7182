#[derive(Debug, thiserror::Error)]
pub enum SpendflowError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SpendflowError {
    /// True for errors raised by local form validation rather than by the
    /// network or the backend.
    pub fn is_validation(&self) -> bool {
        matches!(self, SpendflowError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, SpendflowError>;
