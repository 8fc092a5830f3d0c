//! Client-side chat view state machine.
//!
//! The view owns the transcript, the input field and at most one in-flight
//! completion buffer. Drivers feed it [`ChatEvent`]s and act on the
//! [`Outbound`] it returns; it never performs I/O itself.
//!
//! ```text
//!            submit                      complete
//!   Idle ─────────────▶ Streaming ─────────────────▶ Idle
//!    │                     │ chunk (buffer grows)
//!    │ fail                │ fail
//!    ▼                     ▼
//!   Error ──── submit ───▶ Streaming
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::message::Message;

/// Quick prompts offered next to the input field. Picking one only fills the
/// input; it still has to go through [`ChatView::submit`].
pub const SUGGESTIONS: [&str; 4] = [
    "Show me details for Astra Link",
    "Tell me about your experience with Rust.",
    "Are you open to remote work.",
    "How do you handle performance optimization?",
];

/// Shown when a failure carries no usable message.
pub const FALLBACK_ERROR: &str = "AI request failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatStatus {
    Idle,
    Streaming,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Submit,
    Chunk(String),
    Complete,
    Fail(String),
}

/// Work the driver must start after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Send { prompt: String },
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Streaming {
        buffer: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ChatView {
    transcript: Vec<Message>,
    input: String,
    phase: Phase,
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view whose transcript starts with the assistant greeting.
    pub fn with_greeting() -> Self {
        Self {
            transcript: vec![Message::greeting()],
            ..Self::default()
        }
    }

    pub fn handle(&mut self, event: ChatEvent) -> Option<Outbound> {
        match event {
            ChatEvent::Submit => self.submit(),
            ChatEvent::Chunk(text) => {
                self.push_chunk(&text);
                None
            }
            ChatEvent::Complete => {
                self.complete();
                None
            }
            ChatEvent::Fail(message) => {
                self.fail(message);
                None
            }
        }
    }

    /// Optimistically append the trimmed input as a user message and ask the
    /// driver to send it. No-op while a request is outstanding or when the
    /// input is blank.
    pub fn submit(&mut self) -> Option<Outbound> {
        if matches!(self.phase, Phase::Streaming { .. }) {
            return None;
        }

        let prompt = self.input.trim();
        if prompt.is_empty() {
            return None;
        }
        let prompt = prompt.to_string();

        self.transcript.push(Message::user(prompt.clone()));
        self.input.clear();
        self.phase = Phase::Streaming {
            buffer: String::new(),
        };

        Some(Outbound::Send { prompt })
    }

    pub fn push_chunk(&mut self, text: &str) {
        if let Phase::Streaming { buffer } = &mut self.phase {
            buffer.push_str(text);
        }
    }

    /// Commit the buffer as an assistant message. An empty completion leaves
    /// the transcript untouched.
    pub fn complete(&mut self) {
        let Phase::Streaming { buffer } = &mut self.phase else {
            return;
        };
        let text = std::mem::take(buffer);
        if !text.is_empty() {
            self.transcript.push(Message::assistant(text));
        }
        self.phase = Phase::Idle;
    }

    /// Record a failure. Whatever was streamed so far is dropped.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        let error = if message.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        };
        self.phase = Phase::Failed { error };
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Replace the input with suggestion `index`. Returns `false` for an
    /// unknown index.
    pub fn apply_suggestion(&mut self, index: usize) -> bool {
        match SUGGESTIONS.get(index) {
            Some(text) => {
                self.set_input(*text);
                true
            }
            None => false,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The partial assistant reply, if anything has streamed yet.
    pub fn in_flight(&self) -> Option<&str> {
        match &self.phase {
            Phase::Streaming { buffer } if !buffer.is_empty() => Some(buffer),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn status(&self) -> ChatStatus {
        match self.phase {
            Phase::Idle => ChatStatus::Idle,
            Phase::Streaming { .. } => ChatStatus::Streaming,
            Phase::Failed { .. } => ChatStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status() == ChatStatus::Streaming
    }

    /// Whether the send control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }
}
