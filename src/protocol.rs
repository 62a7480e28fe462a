//! Wire contract shared by the widget client and the backend
//!
//! A single endpoint: `POST /chat` takes a [`ChatRequest`] and answers with a
//! [`ChatReply`] carrying the reply text and its sentiment label.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Message text; a missing field reads as empty
    #[serde(default)]
    pub message: String,
}

/// Success response body for `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub sentiment: Sentiment,
}

/// Sentiment label attached to bot messages
///
/// User messages carry [`Sentiment::Neutral`] as a placeholder; only
/// bot-authored text is ever labeled meaningfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
