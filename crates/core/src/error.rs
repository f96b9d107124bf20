//! Error taxonomy for one REST submission.

use thiserror::Error;

/// Result type used across the client and screen layers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single submission.
///
/// Keep this focused on what a screen needs to pick a display message:
/// the local-validation case plus the three status buckets. Every failure
/// is terminal for its submission; there are no retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input rejected locally; no request was issued.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backend answered 404.
    #[error("not found")]
    NotFound,

    /// The backend answered 400.
    #[error("invalid input")]
    InvalidInput,

    /// Any other status, or a transport/decode failure.
    #[error("request failed: {0}")]
    RequestFailed(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    /// Whether the failure happened before any network traffic.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Failure surfaced by a screen: the taxonomy bucket plus the fixed
/// display string shown to the user.
///
/// The same [`ApiError`] maps to different strings depending on the screen
/// (a 404 reads "Inventory item not found." on the lookup screen but folds
/// into the no-items message on the category path), so the pairing is made
/// explicit here instead of living on the error itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ScreenError {
    pub cause: ApiError,
    pub message: String,
}

impl ScreenError {
    pub fn new(cause: ApiError, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    /// Local validation failure; the validation text doubles as the display
    /// string.
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            cause: ApiError::Validation(message.clone()),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_local() {
        assert!(ApiError::validation("blank").is_local());
        assert!(!ApiError::NotFound.is_local());
        assert!(!ApiError::request_failed("boom").is_local());
    }

    #[test]
    fn screen_error_displays_its_message() {
        let err = ScreenError::new(ApiError::NotFound, "Inventory item not found.");
        assert_eq!(err.to_string(), "Inventory item not found.");
    }

    #[test]
    fn screen_validation_reuses_message_as_cause() {
        let err = ScreenError::validation("A value is required.");
        assert_eq!(
            err.cause,
            ApiError::Validation("A value is required.".to_string())
        );
    }
}
