//! Document setup helpers.

use smart_buttons_dom::{Document, NodeId, Rect};

/// Create an element and append it to the body.
pub fn mounted_element(doc: &Document, tag: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.append_child(doc.body(), node);
    node
}

/// Append an existing node to the body.
pub fn mount(doc: &Document, node: NodeId) -> NodeId {
    doc.append_child(doc.body(), node);
    node
}

/// Give a node a bounding box, as a layout pass would.
pub fn place(doc: &Document, node: NodeId, x: f32, y: f32, width: f32, height: f32) {
    doc.set_bounding_rect(node, Rect::new(x, y, width, height));
}

/// An element outside any widget, for outside-click tests.
pub fn outside_element(doc: &Document) -> NodeId {
    let node = mounted_element(doc, "div");
    doc.set_class_name(node, "outside");
    node
}
