//! Core conversation controller
//!
//! Implements the Elm Architecture pattern with pure state transitions. All
//! conversation behavior lives in [`transition`]; everything async (HTTP,
//! timers, channels) stays in the widget runtime that drives it.

mod effect;
mod event;
mod state;
mod transition;


pub use effect::Effect;
pub use event::{Event, SendOutcome};
pub use state::{ChatState, Message, Phase, Sender, CLEARED_GREETING, GREETING};
pub use transition::{
    transition, TransitionResult, APP_ERROR_REPLY, PROBE_FAILED_ERROR, UNREACHABLE_ERROR,
    UNREACHABLE_REPLY,
};
