//! Conversation state types

use crate::protocol::Sentiment;
use serde::{Deserialize, Serialize};

/// Greeting shown when a conversation starts
pub const GREETING: &str =
    "Hi! How can I help you today? I can analyze the sentiment of your messages and respond accordingly!";

/// Greeting shown after the log is cleared
pub const CLEARED_GREETING: &str = "Chat cleared! How can I help you today?";

// ============================================================================
// Messages
// ============================================================================

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    /// Mood attached to the message. User messages carry the neutral
    /// placeholder; only bot replies get a real reading.
    pub sentiment: Sentiment,
}

impl Message {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            sentiment: Sentiment::Neutral,
        }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            sentiment,
        }
    }
}

// ============================================================================
// Conversation State
// ============================================================================

/// Where the conversation is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No request outstanding, submissions accepted
    #[default]
    Idle,
    /// A request is in flight, further submissions rejected
    Sending,
}

/// Complete state of one conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatState {
    /// Append-only message log, oldest first
    pub log: Vec<Message>,
    pub phase: Phase,
    /// Last known reachability of the backend. Starts optimistic and is
    /// corrected by the startup probe and by request outcomes.
    pub connected: bool,
    /// Banner error, if one is showing
    pub last_error: Option<String>,
    /// Text sitting in the input box
    pub draft: String,
}

impl ChatState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: vec![Message::bot(GREETING, Sentiment::Neutral)],
            phase: Phase::Idle,
            connected: true,
            last_error: None,
            draft: String::new(),
        }
    }

    /// Whether the typing indicator should show. Derived from the phase so
    /// it can never run ahead of or outlive the request it belongs to.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.phase == Phase::Sending
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
