//! Events that can occur in a conversation

use crate::protocol::Sentiment;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User intents
    /// Submit the given text as a chat message
    Submit { text: String },
    /// Replace the input-box draft
    DraftChanged { text: String },
    /// Reset the log to a fresh greeting
    Clear,
    /// Drop the error banner
    DismissError,

    // Settlements from spawned work
    /// The startup reachability probe came back
    ProbeFinished { reachable: bool },
    /// The in-flight chat request settled
    SendFinished { outcome: SendOutcome },
}

/// How a chat request settled. Exactly one of these is produced per request,
/// no matter how the attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The backend answered with a usable reply
    Replied { text: String, sentiment: Sentiment },
    /// The backend was reached but could not serve the request
    AppError { status: u16 },
    /// The backend never answered at all
    Unreachable,
}
