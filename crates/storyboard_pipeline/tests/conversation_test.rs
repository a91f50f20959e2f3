//! Assistant conversation tests.

mod test_utils;

use std::sync::Arc;
use storyboard_core::{AssistantConfig, Speaker, Turn};
use storyboard_error::GeminiErrorKind;
use storyboard_pipeline::ConversationSession;
use test_utils::MockAssistantBackend;
use tokio::sync::Notify;

const FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

fn config() -> AssistantConfig {
    AssistantConfig::default()
}

#[tokio::test]
async fn test_log_opens_with_greeting() {
    let session = ConversationSession::new(MockAssistantBackend::new_sequence(Vec::new()), config());

    let state = session.state();
    assert_eq!(
        state.turns,
        vec![Turn::assistant(
            "Hello! How can I help you with your storyboard today?"
        )]
    );
    assert!(!state.sending);
}

#[tokio::test]
async fn test_empty_greeting_starts_empty_log() {
    let config = AssistantConfig {
        greeting: String::new(),
        ..config()
    };
    let session = ConversationSession::new(MockAssistantBackend::new_sequence(Vec::new()), config);

    assert!(session.state().turns.is_empty());
}

#[tokio::test]
async fn test_reply_appended_after_user_turn() {
    let backend = Arc::new(MockAssistantBackend::new_sequence(vec![Ok(
        "Try a low angle.".to_string()
    )]));
    let session = ConversationSession::new(Arc::clone(&backend), config());

    let reply = session.send_message("  How should I frame scene 2?  ").await;

    assert_eq!(reply.as_deref(), Some("Try a low angle."));
    let turns = session.state().turns;
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[1], Turn::user("How should I frame scene 2?"));
    assert_eq!(turns[2], Turn::assistant("Try a low angle."));
    assert_eq!(backend.messages(), vec!["How should I frame scene 2?".to_string()]);
}

#[tokio::test]
async fn test_session_established_with_persona() {
    let backend = Arc::new(MockAssistantBackend::new_sequence(Vec::new()));
    let config = config();
    let session = ConversationSession::new(Arc::clone(&backend), config.clone());

    session.send_message("hi").await;
    session.send_message("again").await;

    assert_eq!(backend.start_count(), 1);
    assert_eq!(
        backend.instructions(),
        vec![(config.system_instruction, config.model)]
    );
}

#[tokio::test]
async fn test_backend_failure_yields_fallback() {
    let backend = Arc::new(MockAssistantBackend::new_sequence(vec![Err(
        GeminiErrorKind::ApiRequest("connection reset".to_string()),
    )]));
    let session = ConversationSession::new(Arc::clone(&backend), config());

    let reply = session.send_message("hello").await;

    assert_eq!(reply.as_deref(), Some(FALLBACK));
    let state = session.state();
    assert!(!state.sending);
    let tail: Vec<_> = state.turns[1..].to_vec();
    assert_eq!(tail, vec![Turn::user("hello"), Turn::assistant(FALLBACK)]);

    // The same session serves the next message.
    let reply = session.send_message("still there?").await;
    assert_eq!(reply.as_deref(), Some("echo: still there?"));
    assert_eq!(backend.start_count(), 1);
}

#[tokio::test]
async fn test_failed_establishment_retried_next_send() {
    let backend = Arc::new(MockAssistantBackend::new_failing_start(1));
    let session = ConversationSession::new(Arc::clone(&backend), config());

    let first = session.send_message("one").await;
    let second = session.send_message("two").await;
    session.send_message("three").await;

    assert_eq!(first.as_deref(), Some(FALLBACK));
    assert_eq!(second.as_deref(), Some("echo: two"));
    assert_eq!(backend.start_count(), 2);
    assert_eq!(backend.messages(), vec!["two".to_string(), "three".to_string()]);
}

#[tokio::test]
async fn test_blank_message_is_ignored() {
    let backend = Arc::new(MockAssistantBackend::new_sequence(Vec::new()));
    let session = ConversationSession::new(Arc::clone(&backend), config());
    let before = session.state();

    assert_eq!(session.send_message("   ").await, None);
    assert_eq!(session.state(), before);
    assert_eq!(backend.start_count(), 0);
}

#[tokio::test]
async fn test_message_while_sending_is_ignored() {
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(MockAssistantBackend::new_gated(Arc::clone(&gate)));
    let session = ConversationSession::new(Arc::clone(&backend), config());
    let mut receiver = session.subscribe();

    let (first, second) = tokio::join!(session.send_message("first"), async {
        receiver
            .wait_for(|state| state.sending)
            .await
            .expect("session dropped");
        {
            // The user turn is logged before the backend replies.
            let in_flight = receiver.borrow();
            assert_eq!(in_flight.turns.last(), Some(&Turn::user("first")));
            assert_eq!(in_flight.turns.len(), 2);
        }
        let outcome = session.send_message("second").await;
        gate.notify_one();
        outcome
    });

    assert_eq!(first.as_deref(), Some("echo: first"));
    assert_eq!(second, None);

    let users: Vec<_> = session
        .state()
        .turns
        .into_iter()
        .filter(|turn| turn.speaker == Speaker::User)
        .collect();
    assert_eq!(users, vec![Turn::user("first")]);
}

#[tokio::test]
async fn test_user_turn_logged_before_reply() {
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(MockAssistantBackend::new_gated(Arc::clone(&gate)));
    let session = ConversationSession::new(Arc::clone(&backend), config());
    let mut receiver = session.subscribe();

    let (reply, in_flight) = tokio::join!(session.send_message("frame scene 3"), async {
        let snapshot = receiver
            .wait_for(|state| state.sending)
            .await
            .expect("session dropped")
            .clone();
        gate.notify_one();
        snapshot
    });

    assert_eq!(in_flight.turns.last(), Some(&Turn::user("frame scene 3")));
    assert!(
        in_flight
            .turns
            .iter()
            .skip(1)
            .all(|turn| turn.speaker == Speaker::User)
    );

    assert_eq!(reply.as_deref(), Some("echo: frame scene 3"));
    let state = session.state();
    assert!(!state.sending);
    assert_eq!(state.turns.last(), Some(&Turn::assistant("echo: frame scene 3")));
}
