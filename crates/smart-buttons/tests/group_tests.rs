//! ButtonGroup composition and lifecycle tests.

use serde_json::json;
use smart_buttons::prelude::*;
use smart_buttons_dom::{Document, EventTarget};
use smart_buttons_test_utils::{EventRecorder, fixtures};

fn group_of(doc: &Document, labels: &[&str]) -> ButtonGroup {
    let group = ButtonGroup::new(
        doc,
        ButtonGroupOptions::new().buttons(labels.iter().map(|label| ButtonOptions::new().text(*label))),
    );
    fixtures::mount(doc, group.node());
    group
}

fn texts(doc: &Document, group: &ButtonGroup) -> Vec<String> {
    doc.children(group.node())
        .into_iter()
        .map(|node| doc.text_content(node))
        .collect()
}

#[test]
fn test_buttons_render_in_order() {
    let doc = Document::new();
    let group = group_of(&doc, &["One", "Two", "Three"]);
    assert_eq!(group.len(), 3);
    assert_eq!(texts(&doc, &group), vec!["One", "Two", "Three"]);
    assert!(doc.attribute(group.node(), "id").unwrap().starts_with("sb_"));
}

#[test]
fn test_add_button_at_index_is_found_there() {
    let doc = Document::new();
    let mut group = group_of(&doc, &["A", "B", "C"]);

    for index in 0..=3 {
        let len = group.len();
        let added = group.add_button(ButtonOptions::new().text(format!("N{}", index)), Some(index)).unwrap();
        assert_eq!(group.len(), len + 1);
        assert_eq!(group.get_button(index), Some(added.clone()));
        assert_eq!(doc.children(group.node())[index], added.node());
    }
}

#[test]
fn test_add_button_past_end_appends() {
    let doc = Document::new();
    let mut group = group_of(&doc, &["A"]);
    group.add_button(ButtonOptions::new().text("Z"), Some(10));
    group.add_button(ButtonOptions::new().text("Y"), None);
    assert_eq!(texts(&doc, &group), vec!["A", "Z", "Y"]);
}

#[test]
fn test_remove_button() {
    let doc = Document::new();
    let mut group = group_of(&doc, &["A", "B", "C"]);
    let removed = group.get_button(1).unwrap();

    assert!(group.remove_button(1));
    assert_eq!(group.len(), 2);
    assert!(removed.is_destroyed());
    assert_eq!(texts(&doc, &group), vec!["A", "C"]);

    assert!(!group.remove_button(2));
    assert!(!group.remove_button(usize::MAX));
    assert_eq!(group.len(), 2);
}

#[test]
fn test_get_button_out_of_bounds() {
    let doc = Document::new();
    let group = group_of(&doc, &["A"]);
    assert!(group.get_button(0).is_some());
    assert!(group.get_button(1).is_none());
}

#[test]
fn test_get_buttons_is_a_copy() {
    let doc = Document::new();
    let group = group_of(&doc, &["A", "B"]);
    let mut copy = group.get_buttons();
    copy.reverse();
    copy.pop();
    assert_eq!(group.len(), 2);
    assert_eq!(doc.text_content(group.get_button(0).unwrap().node()), "A");
}

#[test]
fn test_broadcast_setters() {
    let doc = Document::new();
    let group = group_of(&doc, &["A", "B"]);

    group.set_type(ButtonType::Info);
    group.set_size(ButtonSize::Sm);
    group.set_enabled(false);

    for button in group.get_buttons() {
        let node = button.node();
        assert!(doc.has_class(node, "smart-button--info"));
        assert!(doc.has_class(node, "smart-button--sm"));
        assert!(doc.is_disabled(node));
    }
}

#[test]
fn test_buttons_keep_their_callbacks() {
    let doc = Document::new();
    let recorder = EventRecorder::new();
    let group = ButtonGroup::new(
        &doc,
        ButtonGroupOptions::new().buttons([
            ButtonOptions::new().text("Yes").on_click(recorder.handler("yes")),
            ButtonOptions::new().text("No").on_click(recorder.handler("no")),
        ]),
    );
    fixtures::mount(&doc, group.node());

    doc.click(group.get_button(1).unwrap().node());
    assert_eq!(recorder.labels(), vec!["no"]);
}

#[test]
fn test_from_value() {
    let doc = Document::new();
    let group = ButtonGroup::from_value(
        &doc,
        Some(&json!({
            "buttons": [{ "text": "A" }, { "text": "B", "type": "ghost" }],
            "direction": "vertical",
            "spacing": "1rem",
            "alignment": "center",
            "wrap": true,
        })),
    )
    .unwrap();
    let node = group.node();

    assert_eq!(doc.class_name(node), "smart-button-group smart-button-group--vertical");
    assert_eq!(doc.style(node, "gap").as_deref(), Some("1rem"));
    assert_eq!(doc.style(node, "align-items").as_deref(), Some("center"));
    assert_eq!(doc.style(node, "flex-wrap").as_deref(), Some("wrap"));
    assert!(doc.has_class(group.get_button(1).unwrap().node(), "smart-button--ghost"));
}

#[test]
fn test_from_value_requires_config() {
    let doc = Document::new();
    assert_eq!(
        ButtonGroup::from_value(&doc, None).unwrap_err(),
        ConfigError::Missing { widget: "ButtonGroup" }
    );
    assert!(matches!(
        ButtonGroup::from_value(&doc, Some(&json!(["A"]))),
        Err(ConfigError::NotAMapping { .. })
    ));
}

#[test]
fn test_destroy_destroys_each_button_once() {
    let doc = Document::new();
    let mut group = group_of(&doc, &["A", "B"]);
    let buttons = group.get_buttons();
    let node = group.node();

    group.destroy();
    assert!(group.is_destroyed());
    assert!(group.is_empty());
    assert_eq!(doc.parent(node), None);
    for button in &buttons {
        assert!(button.is_destroyed());
        assert_eq!(doc.listener_count(EventTarget::Node(button.node())), 0);
    }

    group.destroy();
    assert!(group.add_button(ButtonOptions::new(), None).is_none());
    assert!(!group.remove_button(0));
    assert_eq!(group.len(), 0);
}
