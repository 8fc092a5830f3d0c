use folio_core::chat::{ChatEvent, ChatStatus, ChatView, FALLBACK_ERROR, Outbound, SUGGESTIONS};
use folio_core::models::message::Role;

fn streaming_view(prompt: &str) -> ChatView {
    let mut view = ChatView::new();
    view.set_input(prompt);
    assert!(view.submit().is_some());
    view
}

#[test]
fn submit_appends_trimmed_user_message_and_clears_input() {
    let mut view = ChatView::new();
    view.set_input("  Tell me about Rust.  ");

    let outbound = view.handle(ChatEvent::Submit);

    assert_eq!(
        outbound,
        Some(Outbound::Send {
            prompt: "Tell me about Rust.".to_string()
        })
    );
    assert_eq!(view.input(), "");
    assert_eq!(view.status(), ChatStatus::Streaming);
    let last = view.transcript().last().unwrap();
    assert_eq!(last.role(), Role::User);
    assert_eq!(last.text(), "Tell me about Rust.");
}

#[test]
fn blank_input_is_not_submitted() {
    let mut view = ChatView::new();
    view.set_input("   \n\t");
    assert_eq!(view.submit(), None);
    assert!(view.transcript().is_empty());
    assert_eq!(view.status(), ChatStatus::Idle);
}

#[test]
fn submit_while_streaming_is_a_no_op() {
    let mut view = streaming_view("first");
    view.set_input("second");

    assert!(!view.can_submit());
    assert_eq!(view.handle(ChatEvent::Submit), None);
    assert_eq!(view.transcript().len(), 1);
    // Editing stays possible while the request is open.
    assert_eq!(view.input(), "second");
}

#[test]
fn completed_stream_commits_exactly_one_assistant_message() {
    let mut view = streaming_view("Tell me about Rust.");
    for chunk in ["Ad", "rian ", "uses Rust for..."] {
        view.handle(ChatEvent::Chunk(chunk.to_string()));
    }
    assert_eq!(view.in_flight(), Some("Adrian uses Rust for..."));

    view.handle(ChatEvent::Complete);

    let assistants: Vec<_> = view
        .transcript()
        .iter()
        .filter(|m| m.role() == Role::Assistant)
        .collect();
    assert_eq!(assistants.len(), 1);
    assert_eq!(assistants[0].text(), "Adrian uses Rust for...");
    assert_eq!(view.in_flight(), None);
    assert_eq!(view.status(), ChatStatus::Idle);
}

#[test]
fn empty_completion_adds_no_message() {
    let mut view = streaming_view("hello");
    view.complete();
    assert_eq!(view.transcript().len(), 1);
    assert_eq!(view.status(), ChatStatus::Idle);
}

#[test]
fn failure_discards_buffer_and_sets_error() {
    let mut view = streaming_view("hello");
    view.push_chunk("partial answ");
    view.handle(ChatEvent::Fail("upstream exploded".to_string()));

    assert_eq!(view.status(), ChatStatus::Error);
    assert_eq!(view.error(), Some("upstream exploded"));
    assert_eq!(view.in_flight(), None);
    assert!(view.transcript().iter().all(|m| m.role() == Role::User));

    // A late completion signal must not resurrect the discarded text.
    view.complete();
    assert_eq!(view.transcript().len(), 1);
}

#[test]
fn blank_failure_message_falls_back() {
    let mut view = ChatView::new();
    view.fail("  ");
    assert_eq!(view.error(), Some(FALLBACK_ERROR));
}

#[test]
fn submit_after_error_retries_and_clears_error() {
    let mut view = streaming_view("hello");
    view.fail("boom");
    view.set_input("hello again");

    assert!(view.submit().is_some());
    assert_eq!(view.error(), None);
    assert_eq!(view.status(), ChatStatus::Streaming);
    assert_eq!(view.transcript().len(), 2);
}

#[test]
fn chunks_outside_streaming_are_ignored() {
    let mut view = ChatView::new();
    view.push_chunk("stray");
    view.complete();
    assert!(view.transcript().is_empty());
    assert_eq!(view.in_flight(), None);
}

#[test]
fn suggestion_fills_input_without_submitting() {
    let mut view = ChatView::with_greeting();
    assert!(view.apply_suggestion(1));
    assert_eq!(view.input(), SUGGESTIONS[1]);
    assert_eq!(view.transcript().len(), 1);
    assert_eq!(view.status(), ChatStatus::Idle);

    assert!(!view.apply_suggestion(SUGGESTIONS.len()));
}

#[test]
fn greeting_seeds_transcript() {
    let view = ChatView::with_greeting();
    assert_eq!(view.transcript().len(), 1);
    assert_eq!(view.transcript()[0].id(), "welcome");
    assert_eq!(view.transcript()[0].role(), Role::Assistant);
}
