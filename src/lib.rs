//! Moodchat: a sentiment-analysis chat backend and an embeddable chat widget.
//!
//! The crate has two halves. The server side ([`api`], [`sentiment`]) exposes
//! a single `POST /chat` endpoint that scores a message with a lexicon-based
//! analyzer and writes a canned reply. The client side ([`widget`],
//! [`controller`], [`client`]) drives a conversation against that endpoint:
//! a pure state machine owns the message log and the single in-flight
//! request, an async runtime executes its effects, and front ends observe
//! the conversation through a watch channel of immutable snapshots.

pub mod api;
pub mod client;
pub mod controller;
pub mod protocol;
pub mod sentiment;
pub mod widget;
