use serde_json::{json, Value};
use thiserror::Error;

use crate::curriculum::CurriculumError;

/// Errors at the request boundary. The scoring engine itself never fails;
/// these cover reading input, decoding it and loading the curriculum.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request JSON: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Curriculum error: {0}")]
    Curriculum(#[from] CurriculumError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Io(_) => "IO_ERROR",
            AppError::Curriculum(_) => "CURRICULUM_ERROR",
        }
    }

    /// `{"error": {"code": .., "message": ..}}`, logging the failure.
    pub fn to_body(&self) -> Value {
        let message = match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidRequest(e) => format!("Request body is not valid JSON: {e}"),
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "Failed to read input".to_string()
            }
            AppError::Curriculum(e) => {
                tracing::error!("Curriculum error: {e}");
                e.to_string()
            }
        };

        json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        })
    }
}
