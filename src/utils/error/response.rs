//! HTTP response handling for errors

use super::types::FileDropError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::{error, warn};

impl FileDropError {
    /// Status, machine-readable code and public message for this error
    ///
    /// Filesystem details stay in the logs; clients only see the short message.
    pub fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            FileDropError::MissingInput(_) => {
                (StatusCode::BAD_REQUEST, "MISSING_INPUT", "No file uploaded")
            }
            FileDropError::InvalidName(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_FILENAME", "Invalid filename")
            }
            FileDropError::Multipart(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_MULTIPART",
                "Invalid multipart data",
            ),
            FileDropError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", "File not found"),
            FileDropError::DirectoryRead(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DIRECTORY_READ_FAILURE",
                "Failed to read directory",
            ),
            FileDropError::Write(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "WRITE_FAILURE",
                "Failed to upload file",
            ),
            FileDropError::Delete(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DELETE_FAILURE",
                "Failed to delete file",
            ),
            FileDropError::Config(_)
            | FileDropError::Yaml(_)
            | FileDropError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred",
            ),
        }
    }
}

impl ResponseError for FileDropError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, code, message) = self.parts();

        if self.is_client_error() {
            warn!(code, "{}", self);
        } else {
            error!(code, "{}", self);
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
        })
    }
}

/// Error body returned by every API endpoint
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
