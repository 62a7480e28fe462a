//! Embeddable chat widget
//!
//! The async shell around the conversation controller: spawn a widget over
//! any [`ChatApi`] backend, drive it through a [`ChatHandle`], and render
//! from the snapshots it publishes.

mod runtime;
mod traits;

#[cfg(test)]
pub mod testing;

pub use runtime::{ChatHandle, ChatOptions, ChatSnapshot, ChatWidget};
pub use traits::ChatApi;
