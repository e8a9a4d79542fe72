use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

use crate::classifier::QueryClassifier;

/// Default artificial latency before a reply arrives
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Failure of the simulated reply pipeline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplyFault {
    #[error("reply backend unavailable: {0}")]
    Unavailable(String),
}

/// Produces the assistant reply for one user message
///
/// The returned future is the in-flight reply: it resolves with the reply text
/// or faults. There is no cancellation.
#[async_trait]
pub trait ReplySimulator: Send + Sync {
    async fn reply(&self, query: &str) -> Result<String, ReplyFault>;
}

/// Classifies the query after a fixed delay on the tokio timer
pub struct DelayedReplySimulator {
    classifier: Arc<QueryClassifier>,
    delay: Duration,
}

impl DelayedReplySimulator {
    #[must_use]
    pub fn new(classifier: Arc<QueryClassifier>, delay: Duration) -> Self {
        Self { classifier, delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelayedReplySimulator {
    fn default() -> Self {
        Self::new(Arc::new(QueryClassifier::builtin()), DEFAULT_REPLY_DELAY)
    }
}

#[async_trait]
impl ReplySimulator for DelayedReplySimulator {
    async fn reply(&self, query: &str) -> Result<String, ReplyFault> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.classifier.classify(query).reply)
    }
}
