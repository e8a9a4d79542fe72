use std::sync::Arc;
use tokio::sync::watch;

/// The shared "current query" slot between the conversation and the dashboard
///
/// Holds at most one value. Every publish overwrites the previous one and
/// observers only ever see the latest text.
#[derive(Debug, Clone)]
pub struct AnnotationSlot {
    sender: Arc<watch::Sender<Option<String>>>,
}

impl AnnotationSlot {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Overwrite the current query
    pub fn publish(&self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("Publishing dashboard query: {text}");
        // send_replace stores the value even when no view is subscribed
        self.sender.send_replace(Some(text));
    }

    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.sender.borrow().clone()
    }

    /// Read-only handle for a view that displays the annotation
    #[must_use]
    pub fn view(&self) -> AnnotationView {
        AnnotationView {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for AnnotationSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of an [`AnnotationSlot`]
#[derive(Debug, Clone)]
pub struct AnnotationView {
    receiver: watch::Receiver<Option<String>>,
}

impl AnnotationView {
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.receiver.borrow().clone()
    }

    /// Whether a publish happened since the last [`Self::take_changed`]
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Return the latest value if it changed since last seen, marking it seen
    pub fn take_changed(&mut self) -> Option<String> {
        if self.has_changed() {
            self.receiver.borrow_and_update().clone()
        } else {
            None
        }
    }

    /// Wait for the next publish
    ///
    /// Returns `None` once every slot handle has been dropped.
    pub async fn changed(&mut self) -> Option<String> {
        self.receiver.changed().await.ok()?;
        self.receiver.borrow_and_update().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_empty() {
        let slot = AnnotationSlot::new();
        assert!(slot.current().is_none());
        assert!(slot.view().current().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let slot = AnnotationSlot::new();
        slot.publish("show salinity");
        slot.publish("show temperature");
        assert_eq!(slot.current().as_deref(), Some("show temperature"));
    }

    #[test]
    fn test_publish_without_views_is_kept() {
        let slot = AnnotationSlot::new();
        slot.publish("map of floats");
        let view = slot.view();
        assert_eq!(view.current().as_deref(), Some("map of floats"));
    }

    #[test]
    fn test_view_sees_clone_publishes() {
        let slot = AnnotationSlot::new();
        let mut view = slot.view();
        let handle = slot.clone();

        assert!(view.take_changed().is_none());
        handle.publish("equator data");
        assert!(view.has_changed());
        assert_eq!(view.take_changed().as_deref(), Some("equator data"));
        assert!(view.take_changed().is_none());
    }

    #[tokio::test]
    async fn test_changed_wakes_on_publish() {
        let slot = AnnotationSlot::new();
        let mut view = slot.view();

        let publisher = slot.clone();
        tokio::spawn(async move {
            publisher.publish("chart please");
        });

        assert_eq!(view.changed().await.as_deref(), Some("chart please"));
    }

    #[tokio::test]
    async fn test_changed_ends_when_slot_dropped() {
        let slot = AnnotationSlot::new();
        let mut view = slot.view();
        drop(slot);
        assert!(view.changed().await.is_none());
    }
}
