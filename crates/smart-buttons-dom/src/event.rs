//! Events and listener registration types.

use std::fmt;
use std::rc::Rc;

use smart_buttons_core::math::Vec2;

use crate::node::NodeId;

/// Event types understood by the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Element was clicked (press and release).
    Click,
    /// Pointer button pressed on the element.
    MouseDown,
    /// Pointer button released on the element.
    MouseUp,
    /// Pointer entered the element's bounds.
    MouseEnter,
    /// Pointer left the element's bounds.
    MouseLeave,
    /// Key pressed while focus is inside the element.
    KeyDown,
    /// Element gained focus.
    Focus,
    /// Element lost focus.
    Blur,
    /// Application-defined event.
    Custom(String),
}

impl EventType {
    /// Whether the event propagates to ancestors and then to the document.
    pub fn bubbles(&self) -> bool {
        !matches!(
            self,
            EventType::MouseEnter | EventType::MouseLeave | EventType::Focus | EventType::Blur
        )
    }

    /// Pointer activation events are never delivered to disabled elements.
    pub fn is_activation(&self) -> bool {
        matches!(
            self,
            EventType::Click | EventType::MouseDown | EventType::MouseUp
        )
    }

    pub fn name(&self) -> &str {
        match self {
            EventType::Click => "click",
            EventType::MouseDown => "mousedown",
            EventType::MouseUp => "mouseup",
            EventType::MouseEnter => "mouseenter",
            EventType::MouseLeave => "mouseleave",
            EventType::KeyDown => "keydown",
            EventType::Focus => "focus",
            EventType::Blur => "blur",
            EventType::Custom(name) => name,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical key carried by [`EventType::KeyDown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Character(char),
}

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// A single node; sees events targeted at it or bubbling through it.
    Node(NodeId),
    /// The document itself; sees every bubbling event from connected nodes.
    Document,
}

/// An event travelling through the document.
#[derive(Debug, Clone)]
pub struct Event {
    event_type: EventType,
    target: NodeId,
    current_target: Option<EventTarget>,
    pointer: Vec2,
    key: Option<Key>,
    detail: Option<String>,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            current_target: None,
            pointer: Vec2::ZERO,
            key: None,
            detail: None,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target)
    }

    pub fn key_down(target: NodeId, key: Key) -> Self {
        let mut event = Self::new(EventType::KeyDown, target);
        event.key = Some(key);
        event
    }

    pub fn custom(name: impl Into<String>, target: NodeId) -> Self {
        Self::new(EventType::Custom(name.into()), target)
    }

    /// Set the pointer position in client coordinates.
    pub fn at(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn event_type(&self) -> &EventType {
        &self.event_type
    }

    /// The node the event was dispatched to.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The target whose listeners are currently running.
    pub fn current_target(&self) -> Option<EventTarget> {
        self.current_target
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub(crate) fn set_current_target(&mut self, target: EventTarget) {
        self.current_target = Some(target);
    }
}

/// Listener callback.
pub type Listener = Rc<dyn Fn(&mut Event)>;

/// Handle returned by [`Document::add_listener`](crate::Document::add_listener).
///
/// Carries the target it was registered on so removal goes to the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    pub(crate) id: u64,
    pub(crate) target: EventTarget,
}

impl ListenerHandle {
    pub fn target(&self) -> EventTarget {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubbling_types() {
        assert!(EventType::Click.bubbles());
        assert!(EventType::KeyDown.bubbles());
        assert!(EventType::Custom("x".into()).bubbles());
        assert!(!EventType::MouseEnter.bubbles());
        assert!(!EventType::Focus.bubbles());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(EventType::MouseLeave.name(), "mouseleave");
        assert_eq!(EventType::Custom("sb:loaded".into()).to_string(), "sb:loaded");
    }
}
