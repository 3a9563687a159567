use reqwest::StatusCode;
use thiserror::Error;

/// Shown to the user whenever the service did not supply its own message.
pub const FALLBACK_MESSAGE: &str = "Prediction failed";

#[derive(Debug, Error)]
pub enum PredictError {
    /// The service answered with a non-success status and an `{"error": ...}` body.
    #[error("prediction service rejected the request: {0}")]
    Rejected(String),

    /// Non-success status without a usable error body.
    #[error("prediction service returned {0}")]
    Status(StatusCode),

    /// Connection failures and malformed bodies.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl PredictError {
    /// One human-readable line for the error banner. Server-supplied messages
    /// pass through verbatim; everything else collapses to the fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Status(_) | Self::Transport(_) => FALLBACK_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_passes_server_message_through() {
        let err = PredictError::Rejected("No image uploaded".into());
        assert_eq!(err.user_message(), "No image uploaded");
    }

    #[test]
    fn status_falls_back_to_generic_message() {
        let err = PredictError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }
}
