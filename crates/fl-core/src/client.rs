use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::error::PredictError;
use crate::prediction::PredictionResult;

/// Fixed multipart field name the service reads the upload from.
pub const IMAGE_FIELD: &str = "image";

/// Client for the image classification endpoint.
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue exactly one multipart POST carrying the image bytes.
    ///
    /// No retry and no timeout; the caller decides when to submit again.
    pub async fn predict(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<PredictionResult, PredictError> {
        debug!("posting {} ({} bytes) to {}", file_name, bytes.len(), self.endpoint);

        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str(guess_mime(file_name))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.bytes().await.unwrap_or_default();
            warn!("prediction request failed with {}", status);
            Err(error_from_body(status, &body))
        }
    }
}

/// MIME type from the file extension; the service only sniffs it for logging,
/// so an octet-stream fallback is fine for exotic extensions.
fn guess_mime(file_name: &str) -> &'static str {
    image::ImageFormat::from_path(file_name)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}

fn error_from_body(status: StatusCode, body: &[u8]) -> PredictError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => PredictError::Rejected(parsed.error),
        Err(_) => PredictError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FALLBACK_MESSAGE;

    #[test]
    fn error_body_with_message_is_surfaced() {
        let err = error_from_body(StatusCode::BAD_REQUEST, br#"{"error": "No image selected"}"#);
        assert_eq!(err.user_message(), "No image selected");
    }

    #[test]
    fn error_body_without_message_falls_back() {
        let err = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn empty_error_body_falls_back() {
        let err = error_from_body(StatusCode::BAD_GATEWAY, b"");
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn mime_guess_covers_common_image_types() {
        assert_eq!(guess_mime("cat.png"), "image/png");
        assert_eq!(guess_mime("dog.jpeg"), "image/jpeg");
        assert_eq!(guess_mime("weird.bin"), "application/octet-stream");
    }
}
