use crate::services::completion::ProviderError;
use crate::services::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Reply sent for any completion failure; provider detail stays in the logs.
pub const COMPLETION_FAILURE_MESSAGE: &str = "Error with OpenAI API";

/// Errors surfaced by the content and chat routes.
///
/// Content routes answer `{ "message": ... }` with the underlying error text;
/// the chat route answers `{ "error": ... }` and never exposes provider
/// detail.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Shape(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Message is required")]
    MissingMessage,

    #[error("{}", COMPLETION_FAILURE_MESSAGE)]
    Completion(#[source] ProviderError),
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            ContentError::Shape(_) | ContentError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageBody {
                    message: self.to_string(),
                }),
            )
                .into_response(),
            ContentError::MissingMessage => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            ContentError::Completion(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: COMPLETION_FAILURE_MESSAGE.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
