//! Nodes stored in a [`Document`](crate::Document).

use indexmap::{IndexMap, IndexSet};
use smart_buttons_core::alloc::IndexSlot;
use smart_buttons_core::geometry::Rect;

/// Node identifier in a document.
///
/// Ids are generational: once a node is released, its id stops resolving
/// even if the slot is reused by a later node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) IndexSlot);

static_assertions::assert_eq_size!(NodeId, Option<NodeId>);

/// What a node holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// An element with a tag name (`button`, `div`, `span`, ...).
    Element { tag: String },
    /// A run of text.
    Text(String),
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Class list; insertion ordered, never contains duplicates.
    pub(crate) classes: IndexSet<String>,
    /// Inline style properties in CSS syntax (`background-color`, `--effect-color`).
    pub(crate) style: IndexMap<String, String>,
    pub(crate) attributes: IndexMap<String, String>,
    /// Bounding box reported by the host's layout.
    pub(crate) rect: Rect,
}

impl Node {
    pub(crate) fn element(tag: &str) -> Self {
        Self::with_kind(NodeKind::Element {
            tag: tag.to_string(),
        })
    }

    pub(crate) fn text(text: &str) -> Self {
        Self::with_kind(NodeKind::Text(text.to_string()))
    }

    fn with_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            classes: IndexSet::new(),
            style: IndexMap::new(),
            attributes: IndexMap::new(),
            rect: Rect::ZERO,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Tag name for elements, `None` for text nodes.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_disabled(&self) -> bool {
        self.attributes.contains_key("disabled")
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
