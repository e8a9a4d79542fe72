#[cfg(test)]
mod tests;

use thiserror::Error;
use uuid::Uuid;

use crate::{
    annotation::AnnotationSlot,
    classifier::{DataQueryDetector, GREETING},
    message::ChatMessage,
    simulator::{ReplyFault, ReplySimulator},
};

/// Shown in place of a reply when the reply pipeline faults
pub const CONNECTION_TROUBLE_REPLY: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

/// Where a conversation is in its send cycle
///
/// `Idle -> Sending -> AwaitingReply -> Idle`. Sending happens entirely inside
/// [`Conversation::submit`], so only the two resting states are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingReply,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyInput,
    #[error("a reply is still pending")]
    ReplyPending,
    #[error("turn does not belong to the pending reply")]
    UnknownTurn,
}

/// Token for the one in-flight turn of a conversation
#[derive(Debug)]
pub struct PendingTurn {
    placeholder_id: Uuid,
    query: String,
}

impl PendingTurn {
    /// The trimmed user text this turn answers
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn placeholder_id(&self) -> Uuid {
        self.placeholder_id
    }
}

/// How a turn ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied {
        reply: String,
        /// Whether the query was mirrored to the dashboard annotation
        published: bool,
    },
    Faulted(ReplyFault),
}

/// A chat transcript plus its send state machine
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: Option<Uuid>,
    detector: DataQueryDetector,
    annotation: AnnotationSlot,
}

impl Conversation {
    #[must_use]
    pub fn new(greeting: &str, detector: DataQueryDetector, annotation: AnnotationSlot) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            pending: None,
            detector,
            annotation,
        }
    }

    /// Conversation with the built-in greeting and data-query triggers
    #[must_use]
    pub fn with_annotation(annotation: AnnotationSlot) -> Self {
        Self::new(GREETING, DataQueryDetector::builtin(), annotation)
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn state(&self) -> ConversationState {
        if self.pending.is_some() {
            ConversationState::AwaitingReply
        } else {
            ConversationState::Idle
        }
    }

    #[must_use]
    pub fn annotation(&self) -> &AnnotationSlot {
        &self.annotation
    }

    /// Accept a user message and show the pending placeholder
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::EmptyInput`] for blank text and
    /// [`SubmitError::ReplyPending`] while another reply is in flight. Neither
    /// changes the transcript.
    pub fn submit(&mut self, text: &str) -> Result<PendingTurn, SubmitError> {
        if self.pending.is_some() {
            return Err(SubmitError::ReplyPending);
        }
        let query = text.trim();
        if query.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        self.messages.push(ChatMessage::user(query));
        let placeholder = ChatMessage::pending();
        let placeholder_id = placeholder.id;
        self.messages.push(placeholder);
        self.pending = Some(placeholder_id);
        log::debug!("Awaiting reply for: {query}");

        Ok(PendingTurn {
            placeholder_id,
            query: query.to_string(),
        })
    }

    /// Replace the placeholder with the reply (or the fallback on a fault)
    ///
    /// A successful data query is published to the annotation slot.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::UnknownTurn`] if `turn` is not the pending one.
    pub fn resolve(
        &mut self,
        turn: PendingTurn,
        outcome: Result<String, ReplyFault>,
    ) -> Result<TurnOutcome, SubmitError> {
        if self.pending != Some(turn.placeholder_id) {
            return Err(SubmitError::UnknownTurn);
        }
        self.messages.retain(|message| message.id != turn.placeholder_id);
        self.pending = None;

        match outcome {
            Ok(reply) => {
                self.messages.push(ChatMessage::assistant(reply.clone()));
                let published = self.detector.is_data_query(&turn.query);
                if published {
                    self.annotation.publish(turn.query);
                }
                Ok(TurnOutcome::Replied { reply, published })
            }
            Err(fault) => {
                log::error!("Error sending message: {fault}");
                self.messages
                    .push(ChatMessage::assistant(CONNECTION_TROUBLE_REPLY));
                Ok(TurnOutcome::Faulted(fault))
            }
        }
    }

    /// Submit, wait for the simulated reply, then resolve
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] from [`Self::submit`]. Reply faults are not
    /// errors; they come back as [`TurnOutcome::Faulted`].
    pub async fn send(
        &mut self,
        text: &str,
        simulator: &dyn ReplySimulator,
    ) -> Result<TurnOutcome, SubmitError> {
        let turn = self.submit(text)?;
        let outcome = simulator.reply(turn.query()).await;
        self.resolve(turn, outcome)
    }
}
