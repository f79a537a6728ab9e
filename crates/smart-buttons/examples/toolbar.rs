//! Toolbar Example - a button group and a dropdown driven headlessly
//!
//! This example demonstrates:
//! - Building a ButtonGroup from typed options and a DropdownButton from JSON
//! - Applying a theme to the document root
//! - Driving clicks and keyboard navigation, then printing the resulting tree
//!
//! Run with `RUST_LOG=smart_buttons=trace` to see every no-op and dispatch.

use serde_json::json;
use smart_buttons::prelude::*;
use smart_buttons_core::{logging, profiling};
use smart_buttons_dom::{Document, Key, NodeId};
use std::time::Duration;

fn print_tree(doc: &Document, node: NodeId, depth: usize) {
    let indent = "  ".repeat(depth);
    if doc.is_text(node) {
        println!("{}\"{}\"", indent, doc.text_content(node));
        return;
    }
    let tag = doc.tag(node).unwrap_or_default();
    let class = doc.class_name(node);
    if class.is_empty() {
        println!("{}<{}>", indent, tag);
    } else {
        println!("{}<{} class=\"{}\">", indent, tag, class);
    }
    for child in doc.children(node) {
        print_tree(doc, child, depth + 1);
    }
}

fn main() {
    logging::init();
    profiling::enable(true);

    let doc = Document::new();
    apply_theme(&doc, &Theme::builder().name("ocean").primary("#0077b6").build());

    let toolbar = ButtonGroup::new(
        &doc,
        ButtonGroupOptions::new().alignment(Alignment::Center).buttons([
            ButtonOptions::new()
                .text("Save")
                .icon("fa fa-save")
                .on_click(|_| println!("save clicked")),
            ButtonOptions::new().text("Preview").ty(ButtonType::Secondary),
            ButtonOptions::new()
                .text("Publish")
                .ty(ButtonType::Success)
                .effect(EffectKind::Ripple),
        ]),
    );
    doc.append_child(doc.body(), toolbar.node());

    let more = match DropdownButton::from_value(
        &doc,
        Some(&json!({
            "text": "More",
            "type": "ghost",
            "position": "bottom",
            "items": [
                { "text": "Duplicate", "icon": "fa fa-copy" },
                { "divider": true },
                { "text": "Delete", "icon": "fa fa-trash" }
            ]
        })),
    ) {
        Ok(dropdown) => dropdown,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };
    doc.append_child(doc.body(), more.node());

    if let Some(save) = toolbar.get_button(0) {
        doc.click(save.node());
    }
    profiling::new_frame();

    doc.click(more.trigger().node());
    doc.key_down(more.node(), Key::ArrowDown);
    doc.key_down(more.node(), Key::ArrowDown);
    println!("menu {:?}, focused {:?}", more.state(), doc.active_element());
    doc.key_down(more.node(), Key::Escape);
    profiling::new_frame();

    toolbar.set_size(ButtonSize::Sm);
    doc.advance(Duration::from_millis(600));
    profiling::new_frame();

    print_tree(&doc, doc.body(), 0);
}
