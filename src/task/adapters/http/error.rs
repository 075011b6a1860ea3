//! Typed error to HTTP response mapping.

use crate::task::{
    domain::TaskValidationError,
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Transport-level error carrying its intended response class.
///
/// Validation failures become bad-request responses naming the offending
/// field, missing resources become not-found responses, and anything else
/// becomes a generic application error with an explicit status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-supplied task data violates an invariant.
    #[error(transparent)]
    Validation(TaskValidationError),

    /// The referenced resource does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Generic application-level failure with an intended status code.
    #[error("{message}")]
    App {
        /// HTTP status code to respond with.
        code: StatusCode,
        /// Human-readable failure description.
        message: String,
    },
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(validation) => Self::Validation(validation),
            TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::NotFound("Task")
            }
            TaskServiceError::Repository(repository) => Self::App {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: repository.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(validation) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": validation.to_string(),
                    "field": validation.field(),
                })),
            )
                .into_response(),
            Self::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{resource} not found") })),
            )
                .into_response(),
            Self::App { code, message } => {
                (code, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
