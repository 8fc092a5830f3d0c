//! folio-chat
//!
//! Terminal client for the portfolio relay: an HTTP client for `/api/chat`
//! and a session that drives the chat view state machine with it.

pub mod command;
pub mod error;
pub mod relay;
pub mod session;
