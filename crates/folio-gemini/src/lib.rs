//! folio-gemini
//!
//! Generative model invocation: the injectable [`model::TextModel`] seam, the
//! Gemini streaming client behind it, and system-instruction composition.

pub mod client;
pub mod error;
pub mod model;
pub mod prompt;
