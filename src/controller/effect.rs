//! Effects produced by state transitions

/// Effects to be executed after a state transition. The transition function
/// only describes the work; the runtime performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a chat message to the backend (spawns as background task)
    SendChat { text: String },
}

impl Effect {
    #[must_use]
    pub fn send_chat(text: impl Into<String>) -> Self {
        Effect::SendChat { text: text.into() }
    }
}
