//! Trait abstractions for widget I/O
//!
//! These traits enable testing the runtime with mock implementations.

use crate::client::ApiError;
use crate::protocol::ChatReply;
use async_trait::async_trait;
use std::sync::Arc;

/// Client for the sentiment chat backend
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Send one chat message and wait for the reply.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] classifying whether the backend answered badly
    /// or never answered at all.
    async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError>;

    /// Check whether the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] from the probe round trip. A non-transport
    /// error still proves something answered.
    async fn probe(&self) -> Result<(), ApiError>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: ChatApi + ?Sized> ChatApi for Arc<T> {
    async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        (**self).send_chat(message).await
    }

    async fn probe(&self) -> Result<(), ApiError> {
        (**self).probe().await
    }
}
