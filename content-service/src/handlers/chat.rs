use crate::dtos::{ChatRequest, ChatResponse};
use crate::error::ContentError;
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use metrics::counter;

/// Reply used when the provider answers without any content.
pub const EMPTY_REPLY: &str = "No response";

/// Forward one user message to the completion provider and relay its reply.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ContentError> {
    // An unreadable body carries no message either.
    let message = match payload {
        Ok(Json(request)) => request.into_message(),
        Err(rejection) => {
            tracing::debug!("Unreadable chat request body: {}", rejection);
            None
        }
    };

    let Some(message) = message else {
        counter!("chat_requests_total", "outcome" => "invalid").increment(1);
        return Err(ContentError::MissingMessage);
    };

    let completion = state.completion.complete(&message).await.map_err(|e| {
        tracing::error!(error = %e, "Completion provider request failed");
        counter!("chat_requests_total", "outcome" => "error").increment(1);
        ContentError::Completion(e)
    })?;

    tracing::debug!(
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "Completion received"
    );

    let reply = match completion.text.filter(|text| !text.is_empty()) {
        Some(text) => {
            counter!("chat_requests_total", "outcome" => "ok").increment(1);
            text
        }
        None => {
            counter!("chat_requests_total", "outcome" => "empty").increment(1);
            EMPTY_REPLY.to_string()
        }
    };

    Ok(Json(ChatResponse { reply }))
}
