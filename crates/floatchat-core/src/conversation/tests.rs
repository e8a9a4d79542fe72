use super::*;
use crate::{
    classifier::{QueryClassifier, DEFAULT_REPLY, SALINITY_REPLY, TEMPERATURE_REPLY},
    message::Sender,
    simulator::DelayedReplySimulator,
};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

// Helper to build a conversation with a fresh annotation slot
fn create_conversation() -> Conversation {
    Conversation::with_annotation(AnnotationSlot::new())
}

fn instant_simulator() -> DelayedReplySimulator {
    DelayedReplySimulator::new(Arc::new(QueryClassifier::builtin()), Duration::ZERO)
}

struct FaultySimulator;

#[async_trait]
impl ReplySimulator for FaultySimulator {
    async fn reply(&self, _query: &str) -> Result<String, ReplyFault> {
        Err(ReplyFault::Unavailable("simulated outage".to_string()))
    }
}

fn pending_count(conversation: &Conversation) -> usize {
    conversation
        .messages()
        .iter()
        .filter(|m| m.is_pending)
        .count()
}

// ============================================================================
// submit tests
// ============================================================================

#[test]
fn test_new_conversation_has_greeting() {
    let conversation = create_conversation();
    assert_eq!(conversation.state(), ConversationState::Idle);
    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.messages()[0].sender, Sender::Assistant);
    assert_eq!(conversation.messages()[0].content, GREETING);
}

#[test]
fn test_submit_empty_rejected() {
    let mut conversation = create_conversation();
    assert_eq!(conversation.submit("").unwrap_err(), SubmitError::EmptyInput);
    assert_eq!(
        conversation.submit("   \n\t ").unwrap_err(),
        SubmitError::EmptyInput
    );
    assert_eq!(conversation.state(), ConversationState::Idle);
    assert_eq!(conversation.messages().len(), 1);
}

#[test]
fn test_submit_adds_user_message_and_placeholder() {
    let mut conversation = create_conversation();
    let turn = conversation.submit("  show salinity  ").unwrap();

    assert_eq!(turn.query(), "show salinity");
    assert_eq!(conversation.state(), ConversationState::AwaitingReply);

    let messages = conversation.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[1].content, "show salinity");
    assert!(messages[2].is_pending);
    assert_eq!(messages[2].id, turn.placeholder_id());
}

#[test]
fn test_submit_while_awaiting_rejected() {
    let mut conversation = create_conversation();
    let _turn = conversation.submit("first").unwrap();

    assert_eq!(
        conversation.submit("second").unwrap_err(),
        SubmitError::ReplyPending
    );
    assert_eq!(pending_count(&conversation), 1);
    assert_eq!(conversation.messages().len(), 3);
}

// ============================================================================
// resolve tests
// ============================================================================

#[test]
fn test_resolve_replaces_placeholder() {
    let mut conversation = create_conversation();
    let turn = conversation.submit("hello").unwrap();
    let outcome = conversation
        .resolve(turn, Ok(DEFAULT_REPLY.to_string()))
        .unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::Replied {
            reply: DEFAULT_REPLY.to_string(),
            published: false,
        }
    );
    assert_eq!(conversation.state(), ConversationState::Idle);
    assert_eq!(pending_count(&conversation), 0);
    let last = conversation.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    assert_eq!(last.content, DEFAULT_REPLY);
}

#[test]
fn test_resolve_fault_shows_trouble_message() {
    let slot = AnnotationSlot::new();
    let mut conversation = Conversation::with_annotation(slot.clone());
    let turn = conversation.submit("show temperature").unwrap();
    let fault = ReplyFault::Unavailable("down".to_string());
    let outcome = conversation.resolve(turn, Err(fault.clone())).unwrap();

    assert_eq!(outcome, TurnOutcome::Faulted(fault));
    assert_eq!(conversation.state(), ConversationState::Idle);
    assert_eq!(pending_count(&conversation), 0);
    assert_eq!(
        conversation.messages().last().unwrap().content,
        CONNECTION_TROUBLE_REPLY
    );
    // Faulted turns never reach the dashboard
    assert!(slot.current().is_none());
}

#[test]
fn test_resolve_foreign_turn_rejected() {
    let mut first = create_conversation();
    let mut second = create_conversation();
    let _own = first.submit("hello").unwrap();
    let foreign = second.submit("hello").unwrap();

    assert_eq!(
        first.resolve(foreign, Ok("x".to_string())).unwrap_err(),
        SubmitError::UnknownTurn
    );
    assert_eq!(first.state(), ConversationState::AwaitingReply);
}

// ============================================================================
// send tests
// ============================================================================

#[tokio::test]
async fn test_send_salinity_near_equator() {
    let slot = AnnotationSlot::new();
    let mut conversation = Conversation::with_annotation(slot.clone());
    let text = "What's the salinity trend near the equator?";

    let outcome = conversation.send(text, &instant_simulator()).await.unwrap();

    assert_eq!(
        outcome,
        TurnOutcome::Replied {
            reply: SALINITY_REPLY.to_string(),
            published: true,
        }
    );
    assert_eq!(slot.current().as_deref(), Some(text));
}

#[tokio::test]
async fn test_send_hello_leaves_annotation() {
    let slot = AnnotationSlot::new();
    slot.publish("show temperature");
    let mut conversation = Conversation::with_annotation(slot.clone());

    let outcome = conversation.send("hello", &instant_simulator()).await.unwrap();

    assert!(matches!(outcome, TurnOutcome::Replied { published: false, .. }));
    assert_eq!(slot.current().as_deref(), Some("show temperature"));
}

#[tokio::test]
async fn test_sequential_queries_last_write_wins() {
    let slot = AnnotationSlot::new();
    let mut conversation = Conversation::with_annotation(slot.clone());
    let simulator = instant_simulator();

    conversation
        .send("show salinity map", &simulator)
        .await
        .unwrap();
    conversation
        .send("temperature profile", &simulator)
        .await
        .unwrap();

    assert_eq!(slot.current().as_deref(), Some("temperature profile"));
}

#[tokio::test]
async fn test_send_empty_is_noop() {
    let mut conversation = create_conversation();
    let err = conversation
        .send("   ", &instant_simulator())
        .await
        .unwrap_err();
    assert_eq!(err, SubmitError::EmptyInput);
    assert_eq!(conversation.messages().len(), 1);
}

#[tokio::test]
async fn test_send_fault_keeps_conversation_usable() {
    let mut conversation = create_conversation();

    let outcome = conversation
        .send("show data", &FaultySimulator)
        .await
        .unwrap();
    assert!(matches!(outcome, TurnOutcome::Faulted(_)));

    let outcome = conversation
        .send("temperature", &instant_simulator())
        .await
        .unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Replied {
            reply: TEMPERATURE_REPLY.to_string(),
            published: true,
        }
    );
    // greeting + 2 user messages + trouble message + reply
    assert_eq!(conversation.messages().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_send_waits_for_simulated_delay() {
    let mut conversation = create_conversation();
    let simulator = DelayedReplySimulator::default();

    let start = tokio::time::Instant::now();
    conversation.send("argo", &simulator).await.unwrap();
    assert!(start.elapsed() >= simulator.delay());
}
