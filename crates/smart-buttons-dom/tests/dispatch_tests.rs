//! Event dispatch and focus tests for the headless document.

use std::cell::RefCell;
use std::rc::Rc;

use smart_buttons_dom::{Document, Event, EventTarget, EventType, Key, NodeId};

fn mounted(doc: &Document, tag: &str) -> NodeId {
    let node = doc.create_element(tag);
    doc.append_child(doc.body(), node);
    node
}

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn(&mut Event)>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_make = log.clone();
    let make = move |label: &str| -> Box<dyn Fn(&mut Event)> {
        let log = log_for_make.clone();
        let label = label.to_string();
        Box::new(move |_event: &mut Event| log.borrow_mut().push(label.clone()))
    };
    (log, make)
}

#[test]
fn test_click_bubbles_to_ancestors_then_document() {
    let doc = Document::new();
    let container = mounted(&doc, "div");
    let button = doc.create_element("button");
    doc.append_child(container, button);

    let (log, make) = recorder();
    doc.add_listener(EventTarget::Document, EventType::Click, make("document"));
    doc.add_listener(EventTarget::Node(container), EventType::Click, make("container"));
    doc.add_listener(EventTarget::Node(button), EventType::Click, make("button"));

    doc.click(button);

    assert_eq!(*log.borrow(), vec!["button", "container", "document"]);
}

#[test]
fn test_stop_propagation_halts_bubbling() {
    let doc = Document::new();
    let container = mounted(&doc, "div");
    let button = doc.create_element("button");
    doc.append_child(container, button);

    let (log, make) = recorder();
    doc.add_listener(EventTarget::Node(button), EventType::Click, |event| event.stop_propagation());
    doc.add_listener(EventTarget::Node(container), EventType::Click, make("container"));

    doc.click(button);

    assert!(log.borrow().is_empty());
}

#[test]
fn test_detached_nodes_do_not_reach_document() {
    let doc = Document::new();
    let orphan = doc.create_element("button");

    let (log, make) = recorder();
    doc.add_listener(EventTarget::Document, EventType::Click, make("document"));
    doc.add_listener(EventTarget::Node(orphan), EventType::Click, make("orphan"));

    doc.click(orphan);

    assert_eq!(*log.borrow(), vec!["orphan"]);
}

#[test]
fn test_disabled_elements_swallow_clicks() {
    let doc = Document::new();
    let button = mounted(&doc, "button");
    let label = doc.create_element("span");
    doc.append_child(button, label);
    doc.set_disabled(button, true);

    let (log, make) = recorder();
    doc.add_listener(EventTarget::Node(button), EventType::Click, make("button"));
    doc.add_listener(EventTarget::Document, EventType::Click, make("document"));

    doc.click(button);
    doc.click(label);
    assert!(log.borrow().is_empty());

    doc.set_disabled(button, false);
    doc.click(label);
    assert_eq!(*log.borrow(), vec!["button", "document"]);
}

#[test]
fn test_mouse_enter_does_not_bubble() {
    let doc = Document::new();
    let container = mounted(&doc, "div");
    let child = doc.create_element("span");
    doc.append_child(container, child);

    let (log, make) = recorder();
    doc.add_listener(EventTarget::Node(container), EventType::MouseEnter, make("container"));

    doc.mouse_enter(child);
    assert!(log.borrow().is_empty());

    doc.mouse_enter(container);
    assert_eq!(*log.borrow(), vec!["container"]);
}

#[test]
fn test_removed_listener_does_not_run() {
    let doc = Document::new();
    let button = mounted(&doc, "button");

    let (log, make) = recorder();
    let handle = doc.add_listener(EventTarget::Node(button), EventType::Click, make("first"));
    assert!(doc.remove_listener(handle));
    assert!(!doc.remove_listener(handle));

    doc.click(button);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_listener_removed_mid_dispatch_is_skipped() {
    let doc = Document::new();
    let button = mounted(&doc, "button");
    let (log, make) = recorder();

    let second: Rc<RefCell<Option<smart_buttons_dom::ListenerHandle>>> = Rc::new(RefCell::new(None));
    let second_for_first = second.clone();
    let doc_for_first = doc.clone();
    doc.add_listener(EventTarget::Node(button), EventType::Click, move |_| {
        if let Some(handle) = second_for_first.borrow_mut().take() {
            doc_for_first.remove_listener(handle);
        }
    });
    *second.borrow_mut() = Some(doc.add_listener(EventTarget::Node(button), EventType::Click, make("second")));

    doc.click(button);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_listener_may_mutate_document() {
    let doc = Document::new();
    let button = mounted(&doc, "button");
    let doc_handle = doc.clone();
    doc.add_listener(EventTarget::Node(button), EventType::Click, move |event| {
        doc_handle.add_class(event.target(), "clicked");
    });

    doc.click(button);
    assert!(doc.has_class(button, "clicked"));
}

#[test]
fn test_focus_fires_blur_then_focus() {
    let doc = Document::new();
    let first = mounted(&doc, "button");
    let second = mounted(&doc, "button");

    let (log, make) = recorder();
    doc.add_listener(EventTarget::Node(first), EventType::Blur, make("first:blur"));
    doc.add_listener(EventTarget::Node(second), EventType::Focus, make("second:focus"));

    assert!(doc.focus(first));
    assert!(doc.focus(second));

    assert_eq!(doc.active_element(), Some(second));
    assert_eq!(*log.borrow(), vec!["first:blur", "second:focus"]);
}

#[test]
fn test_disabled_element_cannot_take_focus() {
    let doc = Document::new();
    let button = mounted(&doc, "button");
    doc.set_disabled(button, true);

    assert!(!doc.focus(button));
    assert_eq!(doc.active_element(), None);
}

#[test]
fn test_detaching_focused_subtree_clears_focus() {
    let doc = Document::new();
    let container = mounted(&doc, "div");
    let button = doc.create_element("button");
    doc.append_child(container, button);
    doc.focus(button);

    doc.detach(container);
    assert_eq!(doc.active_element(), None);
}

#[test]
fn test_key_down_reports_prevent_default() {
    let doc = Document::new();
    let container = mounted(&doc, "div");
    doc.add_listener(EventTarget::Node(container), EventType::KeyDown, |event| {
        if event.key() == Some(&Key::ArrowDown) {
            event.prevent_default();
        }
    });

    assert!(doc.key_down(container, Key::ArrowDown));
    assert!(!doc.key_down(container, Key::Escape));
}

#[test]
fn test_custom_event_carries_detail() {
    let doc = Document::new();
    let node = mounted(&doc, "button");
    let seen = Rc::new(RefCell::new(None));
    let seen_in = seen.clone();
    doc.add_listener(
        EventTarget::Document,
        EventType::Custom("sb:ready".into()),
        move |event| *seen_in.borrow_mut() = event.detail().map(str::to_string),
    );

    doc.dispatch(&mut Event::custom("sb:ready", node).with_detail("ok"));
    assert_eq!(seen.borrow().as_deref(), Some("ok"));
}
