//! Pure state transition function

use super::state::{ChatState, Message, Phase, CLEARED_GREETING};
use super::{Effect, Event, SendOutcome};
use crate::protocol::Sentiment;

/// Bot reply shown when the backend answered but could not process the message
pub const APP_ERROR_REPLY: &str =
    "I'm having trouble processing that right now. Please try again.";

/// Bot reply shown when the backend cannot be reached at all
pub const UNREACHABLE_REPLY: &str =
    "I can't connect to my brain right now! \u{1f916} Please make sure the backend server is running.";

/// Banner error for an unreachable backend
pub const UNREACHABLE_ERROR: &str =
    "Cannot reach server. Please check if the backend is running.";

/// Banner error when the startup probe fails
pub const PROBE_FAILED_ERROR: &str =
    "Cannot connect to backend server. Make sure the backend is running on port 5000.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Pure transition function
///
/// Given the same state and event this always produces the same result, with
/// no I/O. Intents that arrive at the wrong moment (a submit while a request
/// is in flight, a settlement for a request that no longer exists) come back
/// as no-ops rather than errors.
#[must_use]
pub fn transition(state: &ChatState, event: Event) -> TransitionResult {
    match event {
        // ============================================================
        // User intents
        // ============================================================

        Event::Submit { text } => {
            let trimmed = text.trim();
            if trimmed.is_empty() || state.phase == Phase::Sending {
                return TransitionResult::new(state.clone());
            }
            let mut new_state = state.clone();
            new_state.log.push(Message::user(trimmed));
            new_state.draft.clear();
            new_state.phase = Phase::Sending;
            new_state.last_error = None;
            TransitionResult::new(new_state).with_effect(Effect::send_chat(trimmed))
        }

        Event::DraftChanged { text } => {
            let mut new_state = state.clone();
            new_state.draft = text;
            TransitionResult::new(new_state)
        }

        // Clearing does not touch the phase: an in-flight reply still lands,
        // in the fresh log.
        Event::Clear => {
            let mut new_state = state.clone();
            new_state.log = vec![Message::bot(CLEARED_GREETING, Sentiment::Neutral)];
            new_state.last_error = None;
            TransitionResult::new(new_state)
        }

        Event::DismissError => {
            let mut new_state = state.clone();
            new_state.last_error = None;
            TransitionResult::new(new_state)
        }

        // ============================================================
        // Settlements
        // ============================================================

        Event::ProbeFinished { reachable } => {
            let mut new_state = state.clone();
            new_state.connected = reachable;
            new_state.last_error = if reachable {
                None
            } else {
                Some(PROBE_FAILED_ERROR.to_string())
            };
            TransitionResult::new(new_state)
        }

        Event::SendFinished { outcome } => {
            if state.phase != Phase::Sending {
                return TransitionResult::new(state.clone());
            }
            let mut new_state = state.clone();
            new_state.phase = Phase::Idle;
            match outcome {
                SendOutcome::Replied { text, sentiment } => {
                    new_state.log.push(Message::bot(text, sentiment));
                    new_state.connected = true;
                    new_state.last_error = None;
                }
                // The server answered, so connectivity is fine even though
                // the request failed.
                SendOutcome::AppError { status } => {
                    new_state
                        .log
                        .push(Message::bot(APP_ERROR_REPLY, Sentiment::Negative));
                    new_state.connected = true;
                    new_state.last_error = Some(format!("Server error: {status}"));
                }
                SendOutcome::Unreachable => {
                    new_state
                        .log
                        .push(Message::bot(UNREACHABLE_REPLY, Sentiment::Negative));
                    new_state.connected = false;
                    new_state.last_error = Some(UNREACHABLE_ERROR.to_string());
                }
            }
            TransitionResult::new(new_state)
        }
    }
}
