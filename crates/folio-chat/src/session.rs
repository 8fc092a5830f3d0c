//! Drives a [`ChatView`] against a [`PromptRelay`].

use futures::StreamExt;
use tracing::{debug, warn};

use folio_core::chat::{ChatEvent, ChatView, FALLBACK_ERROR, Outbound};
use folio_core::models::message::Message;

use crate::relay::PromptRelay;

/// Rendering hooks. Called in order: any number of `on_chunk`, then exactly
/// one of `on_message` (omitted for an empty reply) or `on_error`.
pub trait ChatObserver {
    fn on_chunk(&mut self, text: &str);
    fn on_message(&mut self, message: &Message);
    fn on_error(&mut self, error: &str);
}

pub struct ChatSession<R> {
    relay: R,
    view: ChatView,
}

impl<R: PromptRelay> ChatSession<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            view: ChatView::with_greeting(),
        }
    }

    pub fn view(&self) -> &ChatView {
        &self.view
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.view.set_input(text);
    }

    pub fn apply_suggestion(&mut self, index: usize) -> bool {
        self.view.apply_suggestion(index)
    }

    /// Submit the current input and stream the reply to completion. Returns
    /// `false` when the view refused the submission.
    pub async fn submit(&mut self, observer: &mut impl ChatObserver) -> bool {
        let Some(Outbound::Send { prompt }) = self.view.handle(ChatEvent::Submit) else {
            return false;
        };
        debug!(chars = prompt.chars().count(), "submitting prompt");

        let mut chunks = match self.relay.open(&prompt).await {
            Ok(chunks) => chunks,
            Err(e) => {
                self.fail(e.to_string(), observer);
                return true;
            }
        };

        while let Some(chunk) = chunks.next().await {
            match chunk {
                Ok(text) => {
                    self.view.push_chunk(&text);
                    observer.on_chunk(&text);
                }
                Err(e) => {
                    self.fail(e.to_string(), observer);
                    return true;
                }
            }
        }

        let committed = self.view.transcript().len();
        self.view.handle(ChatEvent::Complete);
        if let Some(message) = self.view.transcript().get(committed) {
            observer.on_message(message);
        }
        true
    }

    /// Put `text` in the input and submit it.
    pub async fn send(&mut self, text: &str, observer: &mut impl ChatObserver) -> bool {
        self.view.set_input(text);
        self.submit(observer).await
    }

    fn fail(&mut self, message: String, observer: &mut impl ChatObserver) {
        warn!(error = %message, "chat request failed");
        self.view.handle(ChatEvent::Fail(message));
        observer.on_error(self.view.error().unwrap_or(FALLBACK_ERROR));
    }
}
