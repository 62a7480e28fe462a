//! Runtime that drives the conversation controller
//!
//! Owns the conversation state, feeds intents and settlements through the
//! pure transition function, and performs the effects it asks for. Requests
//! run as background tasks and come back as events, so the loop itself never
//! blocks on the network.

use crate::client::{ApiError, ApiErrorKind};
use crate::controller::{transition, ChatState, Effect, Event, Message, SendOutcome};
use crate::widget::ChatApi;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

/// Immutable view of the conversation, published after every transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatSnapshot {
    pub messages: Vec<Message>,
    pub connected: bool,
    pub typing: bool,
    pub last_error: Option<String>,
    pub draft: String,
}

impl From<&ChatState> for ChatSnapshot {
    fn from(state: &ChatState) -> Self {
        Self {
            messages: state.log.clone(),
            connected: state.connected,
            typing: state.is_typing(),
            last_error: state.last_error.clone(),
            draft: state.draft.clone(),
        }
    }
}

/// Tunables for a widget instance
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Minimum apparent duration of a successful round trip. Instant replies
    /// make the typing indicator flicker, so the reply is held back until
    /// this much time has passed since the request started.
    pub reply_delay: Duration,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(800),
        }
    }
}

// ============================================================================
// Handle
// ============================================================================

/// Handle for driving a running widget
///
/// Cloneable; all clones talk to the same conversation. Intents are
/// fire-and-forget: anything rejected by the current state is silently
/// dropped, and the published snapshot is the source of truth.
#[derive(Debug, Clone)]
pub struct ChatHandle {
    event_tx: mpsc::Sender<Event>,
    snapshot_rx: watch::Receiver<ChatSnapshot>,
}

impl ChatHandle {
    /// Submit `text` as a chat message
    pub async fn submit(&self, text: impl Into<String>) {
        self.send(Event::Submit { text: text.into() }).await;
    }

    /// Replace the input-box draft
    pub async fn set_draft(&self, text: impl Into<String>) {
        self.send(Event::DraftChanged { text: text.into() }).await;
    }

    /// Reset the conversation to a fresh greeting
    pub async fn clear(&self) {
        self.send(Event::Clear).await;
    }

    /// Drop the error banner
    pub async fn dismiss_error(&self) {
        self.send(Event::DismissError).await;
    }

    async fn send(&self, event: Event) {
        if self.event_tx.send(event).await.is_err() {
            tracing::warn!("Widget runtime is gone, dropping event");
        }
    }

    /// The most recently published snapshot
    #[must_use]
    pub fn snapshot(&self) -> ChatSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// A receiver that yields a change notification per published snapshot
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<ChatSnapshot> {
        self.snapshot_rx.clone()
    }
}

// ============================================================================
// Runtime
// ============================================================================

/// The conversation runtime behind a [`ChatHandle`]
pub struct ChatWidget<A: ChatApi + 'static> {
    api: Arc<A>,
    options: ChatOptions,
    state: ChatState,
    event_rx: mpsc::Receiver<Event>,
    event_tx: mpsc::Sender<Event>,
    snapshot_tx: watch::Sender<ChatSnapshot>,
}

impl<A: ChatApi + 'static> ChatWidget<A> {
    /// Start a widget over the given backend client and return the handle
    /// for driving it.
    #[must_use]
    pub fn spawn(api: A, options: ChatOptions) -> ChatHandle {
        let (event_tx, event_rx) = mpsc::channel(32);
        let state = ChatState::new();
        let (snapshot_tx, snapshot_rx) = watch::channel(ChatSnapshot::from(&state));

        let widget = Self {
            api: Arc::new(api),
            options,
            state,
            event_rx,
            event_tx: event_tx.clone(),
            snapshot_tx,
        };
        tokio::spawn(widget.run());

        ChatHandle {
            event_tx,
            snapshot_rx,
        }
    }

    async fn run(mut self) {
        tracing::debug!("Starting widget runtime");
        self.spawn_probe();

        // Process events in a loop - no recursion
        loop {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.process_event(event);
                }
                else => break,
            }
        }

        tracing::debug!("Widget runtime stopped");
    }

    fn process_event(&mut self, event: Event) {
        tracing::debug!(?event, "Processing event");

        // Pure state transition
        let result = transition(&self.state, event);
        self.state = result.new_state;
        self.publish();

        for effect in result.effects {
            self.execute_effect(effect);
        }
    }

    /// Publish the current state, skipping no-op updates so watchers only
    /// wake for visible changes.
    fn publish(&self) {
        let snapshot = ChatSnapshot::from(&self.state);
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }

    /// Check backend reachability once, off the event loop.
    fn spawn_probe(&self) {
        let api = Arc::clone(&self.api);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let reachable = match api.probe().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "Backend probe failed");
                    // An error response still proves something answered
                    !e.is_transport()
                }
            };
            let _ = event_tx.send(Event::ProbeFinished { reachable }).await;
        });
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::SendChat { text } => {
                let api = Arc::clone(&self.api);
                let event_tx = self.event_tx.clone();
                let floor = self.options.reply_delay;

                // Spawn the request as a background task; the settlement
                // comes back through the event channel
                tokio::spawn(async move {
                    let started = Instant::now();
                    let outcome = match api.send_chat(&text).await {
                        Ok(reply) => {
                            if let Some(remaining) = floor.checked_sub(started.elapsed()) {
                                tokio::time::sleep(remaining).await;
                            }
                            SendOutcome::Replied {
                                text: reply.reply,
                                sentiment: reply.sentiment,
                            }
                        }
                        Err(e) => outcome_for_error(&e),
                    };
                    let _ = event_tx.send(Event::SendFinished { outcome }).await;
                });
            }
        }
    }
}

/// Map a client error onto the three-way settlement. Failures settle
/// immediately; only successful replies are held for the delay floor.
fn outcome_for_error(error: &ApiError) -> SendOutcome {
    tracing::warn!(error = %error, "Chat request failed");
    match error.kind {
        ApiErrorKind::Transport => SendOutcome::Unreachable,
        ApiErrorKind::Status(code) | ApiErrorKind::Decode(code) => {
            SendOutcome::AppError { status: code }
        }
    }
}
