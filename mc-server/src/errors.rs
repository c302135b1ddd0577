use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mc::basic_models::ValidationError;
use serde_json::json;

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Internal Server Error: {0}")]
    Internal(#[from] anyhow::Error),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Recipe not found")]
    NotFound,
    // Potentially more error types in the future
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Internal(e) => {
                // The detail goes to the log, the wire payload stays opaque
                tracing::error!("internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
            WebError::Validation(e) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response()
            }
            WebError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Recipe not found" })),
            )
                .into_response(),
        }
    }
}
