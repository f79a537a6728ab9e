//! Per-widget event handler bookkeeping.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use smart_buttons_dom::{Document, EventTarget, EventType, Listener, ListenerHandle, NodeId};

struct Registration {
    handle: ListenerHandle,
    event_type: EventType,
    callback: Listener,
}

/// At most one attached handler per key.
///
/// Registering a key that is already taken detaches the previous handler
/// first. Registrations remember their callback so they can be moved to a
/// replacement node after a rebuild.
pub(crate) struct HandlerRegistry<K> {
    entries: IndexMap<K, Registration>,
}

impl<K> Default for HandlerRegistry<K> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K> HandlerRegistry<K>
where
    K: Hash + Eq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        doc: &Document,
        key: K,
        target: EventTarget,
        event_type: EventType,
        callback: Listener,
    ) {
        if let Some(previous) = self.entries.shift_remove(&key) {
            tracing::trace!("Replacing handler for {:?}", key);
            doc.remove_listener(previous.handle);
        }
        let handle = doc.add_shared_listener(target, event_type.clone(), callback.clone());
        self.entries.insert(
            key,
            Registration {
                handle,
                event_type,
                callback,
            },
        );
    }

    /// Detach and forget the handler for `key`.
    pub fn unregister(&mut self, doc: &Document, key: &K) -> bool {
        match self.entries.shift_remove(key) {
            Some(registration) => {
                doc.remove_listener(registration.handle);
                true
            }
            None => false,
        }
    }

    /// Move every handler attached to `from` over to `to`.
    pub fn retarget(&mut self, doc: &Document, from: NodeId, to: NodeId) {
        for registration in self.entries.values_mut() {
            if registration.handle.target() != EventTarget::Node(from) {
                continue;
            }
            doc.remove_listener(registration.handle);
            registration.handle = doc.add_shared_listener(
                EventTarget::Node(to),
                registration.event_type.clone(),
                registration.callback.clone(),
            );
        }
    }

    /// Detach every handler, document-scoped ones included.
    pub fn clear(&mut self, doc: &Document) {
        for (_, registration) in self.entries.drain(..) {
            doc.remove_listener(registration.handle);
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    #[cfg(test)]
    pub fn handle(&self, key: &K) -> Option<ListenerHandle> {
        self.entries.get(key).map(|registration| registration.handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_buttons_dom::Event;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> Listener {
        let log = log.clone();
        Rc::new(move |_: &mut Event| log.borrow_mut().push(label))
    }

    #[test]
    fn test_register_replaces_previous_handler() {
        let doc = Document::new();
        let node = doc.create_element("button");
        doc.append_child(doc.body(), node);
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();

        let target = EventTarget::Node(node);
        registry.register(&doc, "click", target, EventType::Click, recording(&log, "first"));
        registry.register(&doc, "click", target, EventType::Click, recording(&log, "second"));
        doc.click(node);

        assert_eq!(*log.borrow(), vec!["second"]);
        assert_eq!(registry.len(), 1);
        assert_eq!(doc.listener_count(target), 1);
    }

    #[test]
    fn test_unregister() {
        let doc = Document::new();
        let node = doc.create_element("button");
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();

        registry.register(&doc, 1u8, EventTarget::Node(node), EventType::Click, recording(&log, "a"));
        assert!(registry.unregister(&doc, &1));
        assert!(!registry.unregister(&doc, &1));
        assert!(registry.is_empty());
        assert_eq!(doc.listener_count(EventTarget::Node(node)), 0);
    }

    #[test]
    fn test_retarget_moves_node_handlers_only() {
        let doc = Document::new();
        let old = doc.create_element("button");
        let new = doc.create_element("button");
        doc.append_child(doc.body(), new);
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();

        registry.register(&doc, "click", EventTarget::Node(old), EventType::Click, recording(&log, "node"));
        registry.register(&doc, "outside", EventTarget::Document, EventType::Click, recording(&log, "doc"));
        registry.retarget(&doc, old, new);

        assert_eq!(doc.listener_count(EventTarget::Node(old)), 0);
        assert_eq!(doc.listener_count(EventTarget::Node(new)), 1);
        assert_eq!(doc.listener_count(EventTarget::Document), 1);

        doc.click(new);
        assert_eq!(*log.borrow(), vec!["node", "doc"]);
    }

    #[test]
    fn test_clear_detaches_document_handlers() {
        let doc = Document::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();
        registry.register(&doc, "outside", EventTarget::Document, EventType::Click, recording(&log, "doc"));
        let handle = registry.handle(&"outside").unwrap();

        registry.clear(&doc);
        assert!(!doc.has_listener(handle));
        assert!(!registry.contains(&"outside"));
    }
}
