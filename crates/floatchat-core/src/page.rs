use std::sync::Arc;

use crate::{
    annotation::AnnotationSlot,
    config::{Config, ConfigError},
    conversation::{Conversation, SubmitError, TurnOutcome},
    dashboard::DashboardView,
    simulator::{DelayedReplySimulator, ReplySimulator},
};

/// The chat and the dashboard side by side, sharing one annotation slot
pub struct DashboardPage {
    conversation: Conversation,
    dashboard: DashboardView,
    simulator: Box<dyn ReplySimulator>,
}

impl DashboardPage {
    #[must_use]
    pub fn new(
        conversation: Conversation,
        dashboard: DashboardView,
        simulator: Box<dyn ReplySimulator>,
    ) -> Self {
        Self {
            conversation,
            dashboard,
            simulator,
        }
    }

    /// Wire a page from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier overrides in `config` are invalid
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let classifier = Arc::new(config.build_classifier()?);
        let detector = config.build_detector()?;
        let annotation = AnnotationSlot::new();

        let dashboard = DashboardView::new(annotation.view(), config.seed)
            .with_selection(config.dashboard.time_range, config.dashboard.region);
        let conversation = Conversation::new(config.greeting(), detector, annotation);
        let simulator = DelayedReplySimulator::new(classifier, config.reply_delay());

        log::debug!(
            "Dashboard page ready (reply delay {} ms)",
            config.reply_delay_ms
        );
        Ok(Self::new(conversation, dashboard, Box::new(simulator)))
    }

    /// Send one chat message through the simulated reply pipeline
    ///
    /// # Errors
    ///
    /// Returns the conversation's [`SubmitError`] for rejected input.
    pub async fn send(&mut self, text: &str) -> Result<TurnOutcome, SubmitError> {
        self.conversation.send(text, self.simulator.as_ref()).await
    }

    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[must_use]
    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardView {
        &mut self.dashboard
    }
}
