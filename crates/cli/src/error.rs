//! CLI-specific error type and exit code mapping.

use stockroom_core::error::{ApiError, ScreenError};

/// CLI-level error.
///
/// Screen failures are folded into the taxonomy here so each bucket gets a
/// distinct exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Input rejected locally; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A submission failed.
    #[error("{0}")]
    Command(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                      |
    /// |------|------------------------------|
    /// | 0    | Success                      |
    /// | 1    | Command / request failure     |
    /// | 2    | Local validation failure      |
    /// | 4    | Record not found              |
    /// | 10   | IO error                      |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::NotFound(_) => 4,
            Self::Command(_) | Self::JsonSerialize(_) => 1,
            Self::Io(_) => 10,
        }
    }
}

impl From<ScreenError> for CliError {
    fn from(err: ScreenError) -> Self {
        match err.cause {
            ApiError::Validation(_) => Self::Validation(err.message),
            ApiError::NotFound => Self::NotFound(err.message),
            ApiError::InvalidInput | ApiError::RequestFailed(_) => Self::Command(err.message),
        }
    }
}
