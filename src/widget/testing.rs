//! Mock implementations for testing
//!
//! These mocks enable integration testing without real HTTP.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

use super::runtime::{ChatHandle, ChatOptions, ChatSnapshot, ChatWidget};
use super::traits::ChatApi;
use crate::client::ApiError;
use crate::protocol::{ChatReply, Sentiment};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{watch, Notify};

// ============================================================================
// Mock Chat API
// ============================================================================

/// Mock backend that returns queued replies
pub struct MockChatApi {
    replies: Mutex<VecDeque<Result<ChatReply, ApiError>>>,
    probe_results: Mutex<VecDeque<Result<(), ApiError>>>,
    /// Record of all messages sent
    pub sent: Mutex<Vec<String>>,
}

impl MockChatApi {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            probe_results: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, text: impl Into<String>, sentiment: Sentiment) {
        self.replies.lock().unwrap().push_back(Ok(ChatReply {
            reply: text.into(),
            sentiment,
        }));
    }

    /// Queue a failed request
    pub fn queue_error(&self, error: ApiError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Queue a probe outcome. With nothing queued, probes succeed.
    pub fn queue_probe(&self, result: Result<(), ApiError>) {
        self.probe_results.lock().unwrap().push_back(result);
    }

    /// Get recorded messages
    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockChatApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatApi for MockChatApi {
    async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.sent.lock().unwrap().push(message.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::transport("No mock reply queued")))
    }

    async fn probe(&self) -> Result<(), ApiError> {
        self.probe_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

// ============================================================================
// Gated Mock Chat API (for in-flight testing)
// ============================================================================

/// Mock backend that holds each request until released, so tests can observe
/// the conversation while a request is in flight
pub struct GatedChatApi {
    inner: MockChatApi,
    gate: Arc<Notify>,
}

impl GatedChatApi {
    pub fn new() -> Self {
        Self {
            inner: MockChatApi::new(),
            gate: Arc::new(Notify::new()),
        }
    }

    pub fn queue_reply(&self, text: impl Into<String>, sentiment: Sentiment) {
        self.inner.queue_reply(text, sentiment);
    }

    pub fn queue_error(&self, error: ApiError) {
        self.inner.queue_error(error);
    }

    /// Let the waiting request settle
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.inner.sent_messages()
    }
}

impl Default for GatedChatApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatApi for GatedChatApi {
    async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.inner.sent.lock().unwrap().push(message.to_string());
        self.gate.notified().await;
        self.inner
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::transport("No mock reply queued")))
    }

    async fn probe(&self) -> Result<(), ApiError> {
        self.inner.probe().await
    }
}

// ============================================================================
// Test Widget
// ============================================================================

/// Helper for building test widgets with minimal boilerplate
pub struct TestWidget {
    pub api: Arc<MockChatApi>,
    pub handle: ChatHandle,
}

impl TestWidget {
    /// Create a test widget builder with no reply delay
    pub fn new() -> TestWidgetBuilder {
        TestWidgetBuilder::default()
    }

    /// Wait until a published snapshot satisfies `pred`, with timeout
    pub async fn wait_for(
        &self,
        timeout: Duration,
        pred: impl Fn(&ChatSnapshot) -> bool,
    ) -> bool {
        let mut rx = self.handle.watch();
        wait_for_snapshot(&mut rx, timeout, pred).await
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        self.handle.snapshot()
    }
}

#[derive(Default)]
pub struct TestWidgetBuilder {
    api: Option<MockChatApi>,
    reply_delay: Duration,
}

impl TestWidgetBuilder {
    pub fn api(mut self, api: MockChatApi) -> Self {
        self.api = Some(api);
        self
    }

    pub fn reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn build(self) -> TestWidget {
        let api = Arc::new(self.api.unwrap_or_default());
        let handle = ChatWidget::spawn(
            Arc::clone(&api),
            ChatOptions {
                reply_delay: self.reply_delay,
            },
        );
        TestWidget { api, handle }
    }
}

/// Wait until a published snapshot satisfies `pred`, with timeout
pub async fn wait_for_snapshot(
    rx: &mut watch::Receiver<ChatSnapshot>,
    timeout: Duration,
    pred: impl Fn(&ChatSnapshot) -> bool,
) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if pred(&rx.borrow_and_update()) {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        match tokio::time::timeout(Duration::from_millis(50), rx.changed()).await {
            Ok(Ok(())) => {}
            // Runtime is gone; whatever is published now is final
            Ok(Err(_)) => return pred(&rx.borrow()),
            Err(_) => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{
        Sender, APP_ERROR_REPLY, CLEARED_GREETING, GREETING, PROBE_FAILED_ERROR,
        UNREACHABLE_ERROR, UNREACHABLE_REPLY,
    };

    #[tokio::test]
    async fn test_mock_api_records_and_replies() {
        let mock = MockChatApi::new();
        mock.queue_reply("Your mood: POSITIVE", Sentiment::Positive);

        let reply = mock.send_chat("I love this").await.unwrap();
        assert_eq!(reply.reply, "Your mood: POSITIVE");
        assert_eq!(reply.sentiment, Sentiment::Positive);
        assert_eq!(mock.sent_messages(), vec!["I love this"]);

        // Nothing queued: the mock fails like a dead server
        let err = mock.send_chat("again").await.unwrap_err();
        assert!(err.is_transport());
    }

    /// Integration test: a full successful round trip
    #[tokio::test]
    async fn test_round_trip_reply() {
        let widget = TestWidget::new().build();
        widget
            .api
            .queue_reply("Your mood: POSITIVE", Sentiment::Positive);

        widget.handle.submit("I love this").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| {
                    s.messages.len() == 3 && !s.typing
                })
                .await
        );

        let snap = widget.snapshot();
        assert_eq!(snap.messages[0].text, GREETING);
        assert_eq!(snap.messages[1].sender, Sender::User);
        assert_eq!(snap.messages[1].text, "I love this");
        assert_eq!(snap.messages[2].sender, Sender::Bot);
        assert_eq!(snap.messages[2].text, "Your mood: POSITIVE");
        assert_eq!(snap.messages[2].sentiment, Sentiment::Positive);
        assert!(snap.connected);
        assert!(snap.last_error.is_none());
        assert_eq!(widget.api.sent_messages(), vec!["I love this"]);
    }

    /// Integration test: server answers with an error status
    #[tokio::test]
    async fn test_app_error_keeps_connection() {
        let widget = TestWidget::new().build();
        widget.api.queue_error(ApiError::status(500, "boom"));

        widget.handle.submit("hello").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| s.messages.len() == 3)
                .await
        );

        let snap = widget.snapshot();
        assert_eq!(snap.messages[2].text, APP_ERROR_REPLY);
        assert_eq!(snap.messages[2].sentiment, Sentiment::Negative);
        assert!(snap.connected, "an answering server is a reachable server");
        assert_eq!(snap.last_error.as_deref(), Some("Server error: 500"));
        assert!(!snap.typing);
    }

    /// Integration test: a 2xx response with an unusable body settles as a
    /// server error, not a connectivity drop
    #[tokio::test]
    async fn test_decode_failure_counts_as_app_error() {
        let widget = TestWidget::new().build();
        widget
            .api
            .queue_error(ApiError::decode(200, "Failed to parse response"));

        widget.handle.submit("hello").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| s.messages.len() == 3)
                .await
        );

        let snap = widget.snapshot();
        assert_eq!(snap.messages[2].text, APP_ERROR_REPLY);
        assert_eq!(snap.messages[2].sentiment, Sentiment::Negative);
        assert!(snap.connected, "the endpoint answered, just not usefully");
        assert_eq!(snap.last_error.as_deref(), Some("Server error: 200"));
        assert!(!snap.typing);
    }

    /// Integration test: server cannot be reached
    #[tokio::test]
    async fn test_unreachable_marks_disconnected() {
        let widget = TestWidget::new().build();
        widget
            .api
            .queue_error(ApiError::transport("connection refused"));

        widget.handle.submit("hello").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| s.messages.len() == 3)
                .await
        );

        let snap = widget.snapshot();
        assert_eq!(snap.messages[2].text, UNREACHABLE_REPLY);
        assert!(!snap.connected);
        assert_eq!(snap.last_error.as_deref(), Some(UNREACHABLE_ERROR));
    }

    /// Integration test: a failed startup probe shows the banner
    #[tokio::test]
    async fn test_failed_probe_shows_banner() {
        let api = MockChatApi::new();
        api.queue_probe(Err(ApiError::transport("connection refused")));
        let widget = TestWidget::new().api(api).build();

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| !s.connected)
                .await
        );

        let snap = widget.snapshot();
        assert_eq!(snap.last_error.as_deref(), Some(PROBE_FAILED_ERROR));
        assert_eq!(snap.messages.len(), 1, "probe failure adds no messages");
    }

    /// Integration test: an error response to the probe still proves the
    /// server is reachable
    #[tokio::test]
    async fn test_probe_error_response_counts_reachable() {
        let api = MockChatApi::new();
        api.queue_probe(Err(ApiError::status(500, "bad day")));
        let widget = TestWidget::new().api(api).build();

        let disconnected = widget
            .wait_for(Duration::from_millis(200), |s| !s.connected)
            .await;
        assert!(!disconnected);
        assert!(widget.snapshot().last_error.is_none());
    }

    /// Integration test: recovery after a failed send
    #[tokio::test]
    async fn test_recovery_after_unreachable() {
        let widget = TestWidget::new().build();
        widget
            .api
            .queue_error(ApiError::transport("connection refused"));

        widget.handle.submit("hello").await;
        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| !s.connected)
                .await
        );

        // Submitting while disconnected is allowed; the attempt itself is
        // the reachability check
        widget
            .api
            .queue_reply("Your mood: NEUTRAL", Sentiment::Neutral);
        widget.handle.submit("are you back").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| {
                    s.connected && s.messages.len() == 5
                })
                .await
        );
        assert!(widget.snapshot().last_error.is_none());
    }

    /// Integration test: a second submission while one is in flight is
    /// dropped without a trace
    #[tokio::test]
    async fn test_second_submission_while_waiting_is_dropped() {
        let api = Arc::new(GatedChatApi::new());
        api.queue_reply("Your mood: POSITIVE", Sentiment::Positive);
        let handle = ChatWidget::spawn(
            Arc::clone(&api),
            ChatOptions {
                reply_delay: Duration::ZERO,
            },
        );
        let mut rx = handle.watch();

        handle.submit("first").await;
        assert!(
            wait_for_snapshot(&mut rx, Duration::from_secs(2), |s| {
                s.typing && s.messages.len() == 2
            })
            .await
        );

        handle.submit("second").await;
        // The indicator stays on; nothing about the round restarts
        assert!(
            !wait_for_snapshot(&mut rx, Duration::from_millis(200), |s| !s.typing).await
        );

        api.release();
        assert!(
            wait_for_snapshot(&mut rx, Duration::from_secs(2), |s| {
                !s.typing && s.messages.len() == 3
            })
            .await
        );

        assert_eq!(api.sent_messages(), vec!["first"]);
        let snap = rx.borrow().clone();
        assert_eq!(snap.messages[1].text, "first");
        assert_eq!(snap.messages[2].text, "Your mood: POSITIVE");
    }

    /// Integration test: clearing mid-flight lands the reply in the new log
    #[tokio::test]
    async fn test_clear_mid_flight() {
        let api = Arc::new(GatedChatApi::new());
        api.queue_reply("late reply", Sentiment::Positive);
        let handle = ChatWidget::spawn(
            Arc::clone(&api),
            ChatOptions {
                reply_delay: Duration::ZERO,
            },
        );
        let mut rx = handle.watch();

        handle.submit("hello").await;
        assert!(
            wait_for_snapshot(&mut rx, Duration::from_secs(2), |s| s.typing).await
        );

        handle.clear().await;
        assert!(
            wait_for_snapshot(&mut rx, Duration::from_secs(2), |s| {
                s.messages.len() == 1 && s.messages[0].text == CLEARED_GREETING && s.typing
            })
            .await
        );

        api.release();
        assert!(
            wait_for_snapshot(&mut rx, Duration::from_secs(2), |s| {
                s.messages.len() == 2 && !s.typing
            })
            .await
        );
        let snap = rx.borrow().clone();
        assert_eq!(snap.messages[0].text, CLEARED_GREETING);
        assert_eq!(snap.messages[1].text, "late reply");
    }

    /// Integration test: a held request that ends in failure settles only
    /// once the transport returns
    #[tokio::test]
    async fn test_gated_failure_settles_on_release() {
        let api = Arc::new(GatedChatApi::new());
        api.queue_error(ApiError::transport("connection refused"));
        let handle = ChatWidget::spawn(
            Arc::clone(&api),
            ChatOptions {
                reply_delay: Duration::ZERO,
            },
        );
        let mut rx = handle.watch();

        handle.submit("hello").await;
        assert!(
            wait_for_snapshot(&mut rx, Duration::from_secs(2), |s| s.typing).await
        );

        // The failure cannot land while the request is still out
        assert!(
            !wait_for_snapshot(&mut rx, Duration::from_millis(200), |s| !s.typing).await
        );

        api.release();
        assert!(
            wait_for_snapshot(&mut rx, Duration::from_secs(2), |s| {
                !s.typing && !s.connected && s.messages.len() == 3
            })
            .await
        );
        let snap = rx.borrow().clone();
        assert_eq!(snap.messages[2].text, UNREACHABLE_REPLY);
        assert_eq!(snap.last_error.as_deref(), Some(UNREACHABLE_ERROR));
    }

    /// Integration test: whitespace submissions never leave the widget
    #[tokio::test]
    async fn test_whitespace_submission_is_ignored() {
        let widget = TestWidget::new().build();

        widget.handle.submit("   ").await;

        let grew = widget
            .wait_for(Duration::from_millis(200), |s| s.messages.len() > 1)
            .await;
        assert!(!grew);
        assert!(widget.api.sent_messages().is_empty());
    }

    /// Integration test: dismissing the banner keeps the log intact
    #[tokio::test]
    async fn test_dismiss_error_banner() {
        let widget = TestWidget::new().build();
        widget.api.queue_error(ApiError::status(503, "overloaded"));

        widget.handle.submit("hello").await;
        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| s.last_error.is_some())
                .await
        );

        widget.handle.dismiss_error().await;
        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| s.last_error.is_none())
                .await
        );
        assert_eq!(widget.snapshot().messages.len(), 3);
    }

    /// Integration test: the draft follows typing and empties on submit
    #[tokio::test]
    async fn test_draft_tracking() {
        let widget = TestWidget::new().build();
        widget
            .api
            .queue_reply("Your mood: NEUTRAL", Sentiment::Neutral);

        widget.handle.set_draft("hel").await;
        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| s.draft == "hel")
                .await
        );

        widget.handle.set_draft("hello").await;
        widget.handle.submit("hello").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| {
                    s.messages.len() == 3 && s.draft.is_empty()
                })
                .await
        );
    }

    /// Integration test: successful replies are held for the delay floor
    #[tokio::test]
    async fn test_reply_floor_delays_success() {
        let widget = TestWidget::new()
            .reply_delay(Duration::from_millis(100))
            .build();
        widget
            .api
            .queue_reply("Your mood: POSITIVE", Sentiment::Positive);

        let started = std::time::Instant::now();
        widget.handle.submit("hello").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(2), |s| s.messages.len() == 3)
                .await
        );
        assert!(
            started.elapsed() >= Duration::from_millis(100),
            "reply settled after {:?}",
            started.elapsed()
        );
    }

    /// Integration test: failures settle immediately, floor or not
    #[tokio::test]
    async fn test_errors_settle_immediately() {
        let widget = TestWidget::new()
            .reply_delay(Duration::from_secs(5))
            .build();
        widget.api.queue_error(ApiError::transport("refused"));

        widget.handle.submit("hello").await;

        assert!(
            widget
                .wait_for(Duration::from_secs(1), |s| s.messages.len() == 3)
                .await,
            "error settlement must not wait out the reply floor"
        );
    }
}
