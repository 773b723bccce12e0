//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wavekey_domain::error::ClassifyError;

/// JSON error body returned by the façade.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors a façade endpoint can reject or fail with.
#[derive(Debug)]
pub enum ApiError {
    /// The `command` field was missing or empty.
    MissingCommand,
    /// The multipart upload had no usable `file` field.
    MissingFile,
    /// The multipart body could not be read.
    Upload(String),
    /// The classifier collaborator failed.
    Classify(ClassifyError),
    /// The host action was executed and reported failure.
    ActionFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingCommand => (StatusCode::BAD_REQUEST, "command missing".to_owned()),
            Self::MissingFile => (StatusCode::BAD_REQUEST, "no file in upload".to_owned()),
            Self::Upload(detail) => (StatusCode::BAD_REQUEST, detail),
            Self::Classify(ClassifyError::InvalidAudio) => {
                (StatusCode::BAD_REQUEST, ClassifyError::InvalidAudio.to_string())
            }
            Self::Classify(err) => {
                tracing::error!(error = %err, "classification failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::ActionFailed(detail) => {
                tracing::error!(error = %detail, "command execution failed");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
