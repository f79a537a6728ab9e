//! Smart Buttons DOM - a headless structured document.
//!
//! This crate is the rendering collaborator for the widget layer. It models
//! the part of a browser document the widgets touch:
//! - Element and text nodes with parent/child linkage
//! - Class lists, inline style properties and attributes
//! - Host-provided bounding boxes
//! - Focus with `focus`/`blur` events
//! - Listener registration on nodes or on the document, with bubbling dispatch
//! - One-shot deferred callbacks driven by [`Document::advance`]
//!
//! Everything is single-threaded; [`Document`] is an `Rc` handle.

pub mod document;
pub mod event;
pub mod node;
pub mod timer;

pub use document::Document;
pub use event::{Event, EventTarget, EventType, Key, Listener, ListenerHandle};
pub use node::{Node, NodeId, NodeKind};
pub use smart_buttons_core::geometry::Rect;
pub use smart_buttons_core::math::Vec2;
pub use timer::TimerId;
