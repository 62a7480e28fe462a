//! HTTP API for the sentiment backend
//!
//! One route: `POST /chat` takes a message and answers with the mood
//! readout. Stateless, so the router needs no shared app state.

use crate::protocol::{ChatReply, ChatRequest};
use crate::sentiment;
use axum::routing::post;
use axum::{Json, Router};

/// Create the API router
#[must_use]
pub fn router() -> Router {
    Router::new().route("/chat", post(chat))
}

async fn chat(Json(request): Json<ChatRequest>) -> Json<ChatReply> {
    tracing::debug!(chars = request.message.len(), "Analyzing chat message");
    let (reply, sentiment) = sentiment::respond(&request.message);
    Json(ChatReply { reply, sentiment })
}
