//! HTTP client for the sentiment backend

mod error;
mod http;

pub use error::{ApiError, ApiErrorKind};
pub use http::HttpChatClient;
