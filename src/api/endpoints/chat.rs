//! Chat endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::chat::{self, PromptSuggestion};

/// Longest message the responder will look at.
const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /api/chat` — keyword-routed assistant reply.
pub async fn send(
    State(_ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = req.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        return Err(ApiError::BadRequest("Message is required".into()));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {MAX_MESSAGE_CHARS} chars)"
        )));
    }

    Ok(Json(ChatResponse {
        response: chat::respond(message),
    }))
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<PromptSuggestion>,
}

/// `GET /api/chat/suggestions` — prompts for the empty chat state.
pub async fn suggestions(
    State(_ctx): State<ApiContext>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    Ok(Json(SuggestionsResponse {
        suggestions: chat::default_prompt_suggestions(),
    }))
}
