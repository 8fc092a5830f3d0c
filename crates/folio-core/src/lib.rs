//! folio-core
//!
//! Pure domain types for the portfolio chat: transcript messages, the chat
//! view state machine, the grounding document and the HTTP wire shapes.
//! No network or runtime dependency: this is the shared vocabulary of the
//! relay server and its clients.

pub mod chat;
pub mod error;
pub mod focus;
pub mod models;
