//! The document tree: node storage, class/style/attribute access, focus,
//! listener registration and event dispatch.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use indexmap::IndexMap;
use smart_buttons_core::alloc::{HashSet, SparseSet};
use smart_buttons_core::geometry::Rect;
use smart_buttons_core::math::Vec2;
use smart_buttons_core::profiling::profile_function;

use crate::event::{Event, EventTarget, EventType, Key, Listener, ListenerHandle};
use crate::node::{Node, NodeId, NodeKind};
use crate::timer::{TimerId, TimerQueue};

struct ListenerEntry {
    target: EventTarget,
    event_type: EventType,
    callback: Listener,
}

struct DocumentInner {
    nodes: SparseSet<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    active: Option<NodeId>,
    /// Every registered listener in registration order.
    listeners: IndexMap<u64, ListenerEntry>,
    next_listener: u64,
    timers: TimerQueue,
}

impl DocumentInner {
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    /// `node` followed by each of its ancestors.
    fn ancestry(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            path.push(id);
            current = self.node(id).and_then(|n| n.parent);
        }
        path
    }

    fn unlink(&mut self, child: NodeId) -> bool {
        let Some(parent) = self.node(child).and_then(|n| n.parent) else {
            return false;
        };
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.retain(|&c| c != child);
        }
        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = None;
        }
        if self.active.is_some_and(|active| self.contains(child, active)) {
            self.active = None;
        }
        true
    }

    fn link(&mut self, parent: NodeId, child: NodeId, index: Option<usize>) -> bool {
        if !self.nodes.contains(parent.0) || !self.nodes.contains(child.0) {
            return false;
        }
        if self.contains(child, parent) {
            tracing::warn!("refusing to insert {:?} into its own subtree", child);
            return false;
        }
        if self.node(parent).is_some_and(|n| !n.is_element()) {
            return false;
        }
        self.unlink(child);
        if let Some(parent_node) = self.node_mut(parent) {
            let at = index
                .unwrap_or(parent_node.children.len())
                .min(parent_node.children.len());
            parent_node.children.insert(at, child);
        }
        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = Some(parent);
        }
        true
    }

    fn collect_subtree(&self, node: NodeId, out: &mut Vec<NodeId>) {
        out.push(node);
        if let Some(n) = self.node(node) {
            for &child in &n.children {
                self.collect_subtree(child, out);
            }
        }
    }

    fn text_content(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.node(node) else {
            return;
        };
        match &n.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for &child in &n.children {
                    self.text_content(child, out);
                }
            }
        }
    }

    fn find_descendant(&self, root: NodeId, pred: &dyn Fn(&Node) -> bool) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(root)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            if let Some(n) = self.node(id) {
                if pred(n) {
                    found.push(id);
                }
                stack.extend(n.children.iter().rev().copied());
            }
        }
        found
    }
}

/// A headless structured document.
///
/// `Document` is a cheap, clonable handle; clones refer to the same tree. All
/// methods take `&self` and never hold an internal borrow while running
/// listener or timer callbacks, so callbacks may freely call back into the
/// document.
///
/// # Example
///
/// ```
/// use smart_buttons_dom::{Document, Event};
///
/// let doc = Document::new();
/// let button = doc.create_element("button");
/// doc.add_class(button, "primary");
/// doc.append_child(doc.body(), button);
///
/// doc.dispatch(&mut Event::click(button));
/// assert!(doc.is_connected(button));
/// ```
#[derive(Clone)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Document")
            .field("node_count", &inner.nodes.len())
            .field("listener_count", &inner.listeners.len())
            .field("pending_timers", &inner.timers.len())
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with `html`, `head` and `body` elements.
    pub fn new() -> Self {
        let mut nodes = SparseSet::new();
        let root = NodeId(nodes.push(Node::element("html")));
        let head = NodeId(nodes.push(Node::element("head")));
        let body = NodeId(nodes.push(Node::element("body")));
        let mut inner = DocumentInner {
            nodes,
            root,
            head,
            body,
            active: None,
            listeners: IndexMap::new(),
            next_listener: 0,
            timers: TimerQueue::new(),
        };
        inner.link(root, head, None);
        inner.link(root, body, None);
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Whether two handles refer to the same document.
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn root(&self) -> NodeId {
        self.inner.borrow().root
    }

    pub fn head(&self) -> NodeId {
        self.inner.borrow().head
    }

    pub fn body(&self) -> NodeId {
        self.inner.borrow().body
    }

    pub fn node_count(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    // ---- Node creation and lookup ----

    pub fn create_element(&self, tag: &str) -> NodeId {
        NodeId(self.inner.borrow_mut().nodes.push(Node::element(tag)))
    }

    pub fn create_text(&self, text: &str) -> NodeId {
        NodeId(self.inner.borrow_mut().nodes.push(Node::text(text)))
    }

    /// Whether the id still refers to a live node.
    pub fn exists(&self, node: NodeId) -> bool {
        self.inner.borrow().nodes.contains(node.0)
    }

    /// Snapshot of a node.
    pub fn node(&self, node: NodeId) -> Option<Node> {
        self.inner.borrow().node(node).cloned()
    }

    pub fn is_text(&self, node: NodeId) -> bool {
        self.inner
            .borrow()
            .node(node)
            .is_some_and(|n| matches!(n.kind, NodeKind::Text(_)))
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.inner
            .borrow()
            .node(node)
            .and_then(|n| n.tag().map(str::to_string))
    }

    /// Release a node and its whole subtree, detaching it first.
    ///
    /// Listeners registered on released nodes are dropped. Ids of released
    /// nodes stop resolving.
    pub fn release(&self, node: NodeId) {
        let mut inner = self.inner.borrow_mut();
        if node == inner.root || !inner.nodes.contains(node.0) {
            return;
        }
        inner.unlink(node);
        let mut subtree = Vec::new();
        inner.collect_subtree(node, &mut subtree);
        let released: HashSet<NodeId> = subtree.iter().copied().collect();
        inner.listeners.retain(|_, entry| match entry.target {
            EventTarget::Node(id) => !released.contains(&id),
            EventTarget::Document => true,
        });
        for id in subtree {
            inner.nodes.remove(id.0);
        }
    }

    // ---- Tree structure ----

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.inner.borrow().node(node).and_then(|n| n.parent)
    }

    /// All child nodes, text nodes included.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.inner
            .borrow()
            .node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Child elements only.
    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        let inner = self.inner.borrow();
        inner
            .node(node)
            .map(|n| {
                n.children
                    .iter()
                    .copied()
                    .filter(|&c| inner.node(c).is_some_and(Node::is_element))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.inner
            .borrow()
            .node(node)
            .and_then(|n| n.children.first().copied())
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let inner = self.inner.borrow();
        let parent = inner.node(node)?.parent?;
        let siblings = &inner.node(parent)?.children;
        let index = siblings.iter().position(|&c| c == node)?;
        siblings.get(index + 1).copied()
    }

    /// Append `child` to `parent`, moving it from any previous parent.
    ///
    /// Returns `false` if either node is gone, `parent` is a text node, or the
    /// insertion would create a cycle.
    pub fn append_child(&self, parent: NodeId, child: NodeId) -> bool {
        self.inner.borrow_mut().link(parent, child, None)
    }

    /// Insert `child` before `reference`, or append when `reference` is `None`.
    ///
    /// Returns `false` when `reference` is not a child of `parent`.
    pub fn insert_before(&self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(reference) = reference else {
            return inner.link(parent, child, None);
        };
        if reference == child {
            return inner.node(child).is_some_and(|n| n.parent == Some(parent));
        }
        if inner.node(reference).and_then(|n| n.parent) != Some(parent) {
            return false;
        }
        // Unlink first so the reference index is computed on the final list.
        if inner.contains(child, parent) {
            return false;
        }
        inner.unlink(child);
        let index = inner
            .node(parent)
            .and_then(|n| n.children.iter().position(|&c| c == reference));
        inner.link(parent, child, index)
    }

    /// Insert `child` at `index` among `parent`'s element children, appending
    /// when `index` is past the end.
    pub fn insert_element_at(&self, parent: NodeId, child: NodeId, index: usize) -> bool {
        let reference = self
            .element_children(parent)
            .into_iter()
            .filter(|&c| c != child)
            .nth(index);
        self.insert_before(parent, child, reference)
    }

    pub fn remove_child(&self, parent: NodeId, child: NodeId) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.node(child).and_then(|n| n.parent) != Some(parent) {
            return false;
        }
        inner.unlink(child)
    }

    /// Detach `node` from its parent. Returns `false` if it had none.
    pub fn detach(&self, node: NodeId) -> bool {
        self.inner.borrow_mut().unlink(node)
    }

    /// Inclusive ancestry check.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.inner.borrow().contains(ancestor, node)
    }

    /// Whether the node is reachable from the document root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let inner = self.inner.borrow();
        inner.contains(inner.root, node)
    }

    // ---- Classes ----

    /// Add one or more whitespace-separated classes. Existing classes are kept
    /// once.
    pub fn add_class(&self, node: NodeId, class: &str) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            for token in class.split_whitespace() {
                n.classes.insert(token.to_string());
            }
        }
    }

    pub fn remove_class(&self, node: NodeId, class: &str) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            for token in class.split_whitespace() {
                n.classes.shift_remove(token);
            }
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.inner
            .borrow()
            .node(node)
            .is_some_and(|n| n.has_class(class))
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.inner
            .borrow()
            .node(node)
            .map(|n| n.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Space-joined class list.
    pub fn class_name(&self, node: NodeId) -> String {
        self.classes(node).join(" ")
    }

    /// Replace the class list.
    pub fn set_class_name(&self, node: NodeId, class_name: &str) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            n.classes = class_name
                .split_whitespace()
                .map(str::to_string)
                .collect();
        }
    }

    // ---- Inline style ----

    /// Set an inline style property. An empty value removes the property.
    pub fn set_style(&self, node: NodeId, property: &str, value: &str) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            if value.is_empty() {
                n.style.shift_remove(property);
            } else {
                n.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    pub fn remove_style(&self, node: NodeId, property: &str) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            n.style.shift_remove(property);
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.inner
            .borrow()
            .node(node)
            .and_then(|n| n.style(property).map(str::to_string))
    }

    /// All inline style properties in the order they were first set.
    pub fn styles(&self, node: NodeId) -> Vec<(String, String)> {
        self.inner
            .borrow()
            .node(node)
            .map(|n| {
                n.style
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ---- Attributes ----

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attribute(&self, node: NodeId, name: &str) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            n.attributes.shift_remove(name);
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .node(node)
            .and_then(|n| n.attribute(name).map(str::to_string))
    }

    pub fn set_disabled(&self, node: NodeId, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.inner
            .borrow()
            .node(node)
            .is_some_and(Node::is_disabled)
    }

    // ---- Text ----

    /// Replace all children with a single text node (none for empty text).
    ///
    /// On a text node this replaces its text in place.
    pub fn set_text_content(&self, node: NodeId, text: &str) {
        let mut inner = self.inner.borrow_mut();
        let children = match inner.node_mut(node) {
            Some(Node {
                kind: NodeKind::Text(current),
                ..
            }) => {
                *current = text.to_string();
                return;
            }
            Some(n) => n.children.clone(),
            None => return,
        };
        for child in children {
            inner.unlink(child);
        }
        if !text.is_empty() {
            let text_node = NodeId(inner.nodes.push(Node::text(text)));
            inner.link(node, text_node, None);
        }
    }

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.inner.borrow().text_content(node, &mut out);
        out
    }

    // ---- Layout ----

    /// Record the bounding box computed by the host's layout.
    pub fn set_bounding_rect(&self, node: NodeId, rect: Rect) {
        if let Some(n) = self.inner.borrow_mut().node_mut(node) {
            n.rect = rect;
        }
    }

    pub fn bounding_rect(&self, node: NodeId) -> Rect {
        self.inner
            .borrow()
            .node(node)
            .map(Node::rect)
            .unwrap_or(Rect::ZERO)
    }

    // ---- Queries ----

    /// First descendant (document order, excluding `root`) carrying `class`.
    pub fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.query_class_all(root, class).into_iter().next()
    }

    /// All descendants of `root` carrying `class`, in document order.
    pub fn query_class_all(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.inner
            .borrow()
            .find_descendant(root, &|n: &Node| n.has_class(class))
    }

    // ---- Focus ----

    pub fn active_element(&self) -> Option<NodeId> {
        self.inner.borrow().active
    }

    /// Move focus to `node`, firing `blur` on the previous element and `focus`
    /// on the new one. Disabled elements and text nodes cannot take focus.
    pub fn focus(&self, node: NodeId) -> bool {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            match inner.node(node) {
                Some(n) if n.is_element() && !n.is_disabled() => {}
                _ => return false,
            }
            if inner.active == Some(node) {
                return true;
            }
            inner.active.replace(node)
        };
        if let Some(previous) = previous.filter(|&p| self.exists(p)) {
            self.dispatch(&mut Event::new(EventType::Blur, previous));
        }
        self.dispatch(&mut Event::new(EventType::Focus, node));
        true
    }

    /// Clear focus, firing `blur` on the element that had it.
    pub fn blur(&self) {
        let previous = self.inner.borrow_mut().active.take();
        if let Some(previous) = previous.filter(|&p| self.exists(p)) {
            self.dispatch(&mut Event::new(EventType::Blur, previous));
        }
    }

    // ---- Listeners ----

    /// Register a listener. Multiple listeners may share a target and type;
    /// they run in registration order.
    pub fn add_listener<F>(&self, target: EventTarget, event_type: EventType, callback: F) -> ListenerHandle
    where
        F: Fn(&mut Event) + 'static,
    {
        self.add_shared_listener(target, event_type, Rc::new(callback))
    }

    /// Register an already shared listener callback.
    pub fn add_shared_listener(
        &self,
        target: EventTarget,
        event_type: EventType,
        callback: Listener,
    ) -> ListenerHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.insert(
            id,
            ListenerEntry {
                target,
                event_type,
                callback,
            },
        );
        ListenerHandle { id, target }
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn remove_listener(&self, handle: ListenerHandle) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.listeners.get(&handle.id) {
            Some(entry) if entry.target == handle.target => {
                inner.listeners.shift_remove(&handle.id);
                true
            }
            _ => false,
        }
    }

    pub fn has_listener(&self, handle: ListenerHandle) -> bool {
        self.inner.borrow().listeners.contains_key(&handle.id)
    }

    /// Number of listeners registered on a target.
    pub fn listener_count(&self, target: EventTarget) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|entry| entry.target == target)
            .count()
    }

    // ---- Dispatch ----

    /// Dispatch an event to its target.
    ///
    /// Non-bubbling events only reach the target. Bubbling events then visit
    /// each ancestor and, for connected nodes, the document. Activation events
    /// aimed at a disabled element (or anything inside one) are dropped.
    pub fn dispatch(&self, event: &mut Event) {
        profile_function!();
        let target = event.target();
        let (path, connected) = {
            let inner = self.inner.borrow();
            if !inner.nodes.contains(target.0) {
                return;
            }
            let ancestry = inner.ancestry(target);
            if event.event_type().is_activation()
                && ancestry
                    .iter()
                    .any(|&id| inner.node(id).is_some_and(Node::is_disabled))
            {
                tracing::trace!("dropping {} on disabled {:?}", event.event_type(), target);
                return;
            }
            let connected = ancestry.last() == Some(&inner.root);
            if event.event_type().bubbles() {
                (ancestry, connected)
            } else {
                (vec![target], false)
            }
        };

        tracing::trace!("dispatch {} to {:?}", event.event_type(), target);
        for node in path {
            if event.is_propagation_stopped() {
                return;
            }
            self.invoke(EventTarget::Node(node), event);
        }
        if connected && !event.is_propagation_stopped() {
            self.invoke(EventTarget::Document, event);
        }
    }

    fn invoke(&self, target: EventTarget, event: &mut Event) {
        let batch: Vec<(u64, Listener)> = {
            let inner = self.inner.borrow();
            inner
                .listeners
                .iter()
                .filter(|(_, entry)| entry.target == target && &entry.event_type == event.event_type())
                .map(|(&id, entry)| (id, entry.callback.clone()))
                .collect()
        };
        event.set_current_target(target);
        for (id, callback) in batch {
            // A listener removed by an earlier one in this batch does not run.
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            callback(event);
        }
    }

    /// Dispatch a click at the centre of the node's bounding box.
    pub fn click(&self, node: NodeId) {
        let rect = self.bounding_rect(node);
        let centre = Vec2::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
        self.dispatch(&mut Event::click(node).at(centre));
    }

    /// Dispatch a click at an explicit client position.
    pub fn click_at(&self, node: NodeId, pointer: Vec2) {
        self.dispatch(&mut Event::click(node).at(pointer));
    }

    /// Dispatch a key press to `node`. Returns whether a listener prevented
    /// the default action.
    pub fn key_down(&self, node: NodeId, key: Key) -> bool {
        let mut event = Event::key_down(node, key);
        self.dispatch(&mut event);
        event.is_default_prevented()
    }

    /// Dispatch a key press to the focused element, or the body without focus.
    pub fn key_down_focused(&self, key: Key) -> bool {
        let target = self.active_element().unwrap_or_else(|| self.body());
        self.key_down(target, key)
    }

    pub fn mouse_enter(&self, node: NodeId) {
        self.dispatch(&mut Event::new(EventType::MouseEnter, node));
    }

    pub fn mouse_leave(&self, node: NodeId) {
        self.dispatch(&mut Event::new(EventType::MouseLeave, node));
    }

    // ---- Deferred callbacks ----

    /// Schedule a one-shot callback `delay` after the current document time.
    pub fn set_timeout<F>(&self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce(&Document) + 'static,
    {
        self.inner
            .borrow_mut()
            .timers
            .schedule(delay, Box::new(callback))
    }

    /// Advance document time and run every callback that became due, earliest
    /// first. Returns how many ran.
    pub fn advance(&self, delta: Duration) -> usize {
        profile_function!();
        self.inner.borrow_mut().timers.advance_clock(delta);
        let mut ran = 0;
        loop {
            let next = self.inner.borrow_mut().timers.pop_due();
            let Some(callback) = next else {
                break;
            };
            callback(self);
            ran += 1;
        }
        ran
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().timers.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }
}
