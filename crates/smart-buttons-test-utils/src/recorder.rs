//! Recording event handler invocations.

use std::sync::Arc;

use parking_lot::Mutex;
use smart_buttons_dom::{Event, EventType, NodeId};

/// One recorded handler call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Label given to the handler that ran.
    pub label: String,
    pub event_type: EventType,
    pub target: NodeId,
}

/// Shared log of handler calls.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records every call under `label`.
    pub fn handler(&self, label: impl Into<String>) -> impl Fn(&mut Event) + 'static {
        let calls = self.calls.clone();
        let label = label.into();
        move |event: &mut Event| {
            calls.lock().push(RecordedCall {
                label: label.clone(),
                event_type: event.event_type().clone(),
                target: event.target(),
            });
        }
    }

    /// All recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Labels of the recorded calls, in order.
    pub fn labels(&self) -> Vec<String> {
        self.calls.lock().iter().map(|call| call.label.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Count calls recorded under `label`.
    pub fn count_label(&self, label: &str) -> usize {
        self.calls.lock().iter().filter(|call| call.label == label).count()
    }

    /// Count calls of one event type.
    pub fn count_type(&self, event_type: &EventType) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| &call.event_type == event_type)
            .count()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_buttons_dom::Document;

    #[test]
    fn test_records_calls() {
        let doc = Document::new();
        let recorder = EventRecorder::new();
        let handler = recorder.handler("a");

        handler(&mut Event::click(doc.body()));
        handler(&mut Event::new(EventType::Focus, doc.body()));

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.count_type(&EventType::Click), 1);
        assert_eq!(recorder.labels(), vec!["a", "a"]);

        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_clones_share_log() {
        let doc = Document::new();
        let recorder = EventRecorder::new();
        let clone = recorder.clone();
        clone.handler("b")(&mut Event::click(doc.body()));
        assert_eq!(recorder.count_label("b"), 1);
    }
}
