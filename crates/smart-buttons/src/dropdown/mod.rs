//! Dropdown button: a trigger [`Button`] plus a menu of selectable items.
//!
//! The menu is either `Closed` or `Open`. It opens on trigger clicks (and on
//! hover in [`TriggerMode::Hover`]) and closes on a second trigger click, a
//! click outside the widget, Escape, or after an item is selected.
//!
//! All element listeners are attached to the container and dispatch on the
//! event target, so rebuilding the trigger or re-rendering items never leaves
//! a stale handler behind.

mod config;
pub mod navigation;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde_json::Value;
use smart_buttons_core::profiling::profile_function;
use smart_buttons_dom::{Document, Event, EventTarget, EventType, Key, NodeId};

use crate::button::{Button, ButtonOptions};
use crate::callback::Callback;
use crate::config::parse_options;
use crate::error::ConfigResult;
use crate::registry::HandlerRegistry;
use crate::visual;

pub use config::{DropdownConfig, DropdownOptions, MenuItem, MenuPosition, TriggerMode};
pub use navigation::FocusDirection;

pub const DROPDOWN_CLASS: &str = "smart-dropdown";
pub const MENU_CLASS: &str = "smart-dropdown__menu";
pub const MENU_SHOW_CLASS: &str = "smart-dropdown__menu--show";
pub const ITEM_CLASS: &str = "smart-dropdown__item";
pub const DIVIDER_CLASS: &str = "smart-dropdown__divider";

const MENU_GAP: &str = "0.125rem";
const PLACEMENT_PROPERTIES: [&str; 8] = [
    "top",
    "bottom",
    "left",
    "right",
    "margin-top",
    "margin-bottom",
    "margin-left",
    "margin-right",
];

/// Open/closed state of the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Handler {
    Click,
    OutsideClick,
    KeyDown,
    MouseEnter,
    MouseLeave,
}

type WeakState = Weak<RefCell<DropdownState>>;

struct DropdownState {
    doc: Document,
    id: String,
    node: NodeId,
    trigger: Button,
    menu: NodeId,
    items: Vec<MenuItem>,
    item_nodes: Vec<NodeId>,
    position: MenuPosition,
    trigger_mode: TriggerMode,
    handlers: HandlerRegistry<Handler>,
    state: MenuState,
    destroyed: bool,
}

enum ClickAction {
    Select(Option<Callback>),
    Toggle,
    Ignore,
}

impl DropdownState {
    fn menu_class_name(&self) -> String {
        let position = format!("{}--{}", MENU_CLASS, self.position.as_str());
        let show = (self.state == MenuState::Open).then_some(MENU_SHOW_CLASS);
        visual::merge_classes([Some(MENU_CLASS), Some(position.as_str()), show])
    }

    fn render_item(&self, item: &MenuItem) -> NodeId {
        let doc = &self.doc;
        match item {
            MenuItem::Divider => {
                let node = doc.create_element("div");
                doc.set_class_name(node, DIVIDER_CLASS);
                node
            }
            MenuItem::Action {
                label, icon, enabled, ..
            } => {
                let node = doc.create_element("button");
                doc.set_class_name(node, ITEM_CLASS);
                doc.set_text_content(node, label);
                doc.set_disabled(node, !enabled);
                if let Some(icon) = icon {
                    let icon_node = doc.create_element("i");
                    doc.set_class_name(icon_node, &format!("smart-button__icon {}", icon));
                    doc.set_style(icon_node, "margin-right", "0.5rem");
                    doc.insert_before(node, icon_node, doc.first_child(node));
                }
                node
            }
        }
    }

    fn render_items(&mut self) {
        profile_function!();
        for node in self.item_nodes.drain(..) {
            self.doc.release(node);
        }
        let nodes: Vec<NodeId> = self.items.iter().map(|item| self.render_item(item)).collect();
        for &node in &nodes {
            self.doc.append_child(self.menu, node);
        }
        self.item_nodes = nodes;
        self.reindex();
    }

    /// Keep `data-index` on action items equal to their list position.
    fn reindex(&self) {
        for (index, (item, &node)) in self.items.iter().zip(&self.item_nodes).enumerate() {
            if !item.is_divider() {
                self.doc.set_attribute(node, "data-index", &index.to_string());
            }
        }
    }

    fn apply_placement(&self) {
        let (doc, menu) = (&self.doc, self.menu);
        doc.set_style(menu, "position", "absolute");
        for property in PLACEMENT_PROPERTIES {
            doc.remove_style(menu, property);
        }
        let rules: [(&str, &str); 3] = match self.position {
            MenuPosition::Bottom => [("top", "100%"), ("left", "0"), ("margin-top", MENU_GAP)],
            MenuPosition::Top => [("bottom", "100%"), ("left", "0"), ("margin-bottom", MENU_GAP)],
            MenuPosition::Left => [("top", "0"), ("right", "100%"), ("margin-right", MENU_GAP)],
            MenuPosition::Right => [("top", "0"), ("left", "100%"), ("margin-left", MENU_GAP)],
        };
        for (property, value) in rules {
            doc.set_style(menu, property, value);
        }
    }

    /// Item nodes keyboard navigation may land on, in order.
    fn navigable_nodes(&self) -> Vec<NodeId> {
        self.items
            .iter()
            .zip(&self.item_nodes)
            .filter(|(item, _)| item.is_enabled())
            .map(|(_, &node)| node)
            .collect()
    }

    /// Index of the item containing `node`, if any.
    fn item_index_of(&self, node: NodeId) -> Option<usize> {
        self.item_nodes
            .iter()
            .position(|&item| self.doc.contains(item, node))
    }

    fn click_action(&self, target: NodeId) -> ClickAction {
        if let Some(index) = self.item_index_of(target) {
            return match &self.items[index] {
                MenuItem::Action {
                    enabled: true,
                    on_click,
                    ..
                } => ClickAction::Select(on_click.clone()),
                _ => ClickAction::Ignore,
            };
        }
        if self.doc.contains(self.trigger.node(), target) {
            return ClickAction::Toggle;
        }
        ClickAction::Ignore
    }

    fn attach_listeners(&mut self, weak: &WeakState) {
        let doc = self.doc.clone();
        let container = EventTarget::Node(self.node);

        let this = weak.clone();
        self.handlers.register(
            &doc,
            Handler::Click,
            container,
            EventType::Click,
            Rc::new(move |event: &mut Event| on_click(&this, event)),
        );

        let this = weak.clone();
        self.handlers.register(
            &doc,
            Handler::OutsideClick,
            EventTarget::Document,
            EventType::Click,
            Rc::new(move |event: &mut Event| on_outside_click(&this, event)),
        );

        let this = weak.clone();
        self.handlers.register(
            &doc,
            Handler::KeyDown,
            container,
            EventType::KeyDown,
            Rc::new(move |event: &mut Event| on_key_down(&this, event)),
        );

        self.attach_hover_listeners(weak);
    }

    fn attach_hover_listeners(&mut self, weak: &WeakState) {
        let doc = self.doc.clone();
        self.handlers.unregister(&doc, &Handler::MouseEnter);
        self.handlers.unregister(&doc, &Handler::MouseLeave);
        if self.trigger_mode != TriggerMode::Hover {
            return;
        }

        let container = EventTarget::Node(self.node);
        let this = weak.clone();
        self.handlers.register(
            &doc,
            Handler::MouseEnter,
            container,
            EventType::MouseEnter,
            Rc::new(move |_: &mut Event| {
                if let Some(dropdown) = DropdownButton::upgrade(&this) {
                    dropdown.open();
                }
            }),
        );
        let this = weak.clone();
        self.handlers.register(
            &doc,
            Handler::MouseLeave,
            container,
            EventType::MouseLeave,
            Rc::new(move |_: &mut Event| {
                if let Some(dropdown) = DropdownButton::upgrade(&this) {
                    dropdown.close();
                }
            }),
        );
    }
}

fn on_click(weak: &WeakState, event: &mut Event) {
    let Some(dropdown) = DropdownButton::upgrade(weak) else {
        return;
    };
    let action = {
        let state = dropdown.inner.borrow();
        if state.destroyed {
            return;
        }
        state.click_action(event.target())
    };
    match action {
        ClickAction::Select(callback) => {
            if let Some(callback) = callback {
                callback.call(event);
            }
            dropdown.close();
        }
        ClickAction::Toggle => dropdown.toggle(),
        ClickAction::Ignore => {}
    }
}

fn on_outside_click(weak: &WeakState, event: &mut Event) {
    let Some(dropdown) = DropdownButton::upgrade(weak) else {
        return;
    };
    let outside = {
        let state = dropdown.inner.borrow();
        !state.destroyed && !state.doc.contains(state.node, event.target())
    };
    if outside {
        dropdown.close();
    }
}

fn on_key_down(weak: &WeakState, event: &mut Event) {
    let Some(dropdown) = DropdownButton::upgrade(weak) else {
        return;
    };
    match event.key().cloned() {
        Some(Key::Escape) => dropdown.close(),
        Some(Key::Enter | Key::Space) => {
            let focused = {
                let state = dropdown.inner.borrow();
                let active = state.doc.active_element();
                (state.state == MenuState::Open)
                    .then_some(active)
                    .flatten()
                    .filter(|&node| state.item_nodes.contains(&node))
                    .map(|node| (state.doc.clone(), node))
            };
            if let Some((doc, node)) = focused {
                event.prevent_default();
                doc.click(node);
            }
        }
        Some(Key::ArrowDown) => {
            event.prevent_default();
            dropdown.focus_item(FocusDirection::Next);
        }
        Some(Key::ArrowUp) => {
            event.prevent_default();
            dropdown.focus_item(FocusDirection::Previous);
        }
        _ => {}
    }
}

/// A button that opens a menu of items.
///
/// Cheap to clone; clones share the widget.
#[derive(Clone)]
pub struct DropdownButton {
    inner: Rc<RefCell<DropdownState>>,
}

impl DropdownButton {
    pub fn new(doc: &Document, options: DropdownOptions) -> Self {
        profile_function!();
        let trigger = Button::new(doc, options.button);
        let node = doc.create_element("div");
        let menu = doc.create_element("div");
        let id = visual::generate_id();

        doc.set_class_name(node, DROPDOWN_CLASS);
        doc.set_attribute(node, "id", &id);
        doc.append_child(node, trigger.node());
        doc.append_child(node, menu);

        let inner = Rc::new(RefCell::new(DropdownState {
            doc: doc.clone(),
            id,
            node,
            trigger,
            menu,
            items: options.items.unwrap_or_default(),
            item_nodes: Vec::new(),
            position: options.position.unwrap_or_default(),
            trigger_mode: options.trigger.unwrap_or_default(),
            handlers: HandlerRegistry::new(),
            state: MenuState::Closed,
            destroyed: false,
        }));
        {
            let weak = Rc::downgrade(&inner);
            let mut state = inner.borrow_mut();
            let class_name = state.menu_class_name();
            doc.set_class_name(menu, &class_name);
            state.render_items();
            state.attach_listeners(&weak);
            tracing::debug!("DropdownButton {} created with {} items", state.id, state.items.len());
        }
        Self { inner }
    }

    /// Build a dropdown from a loosely-typed configuration. The configuration
    /// is required.
    pub fn from_value(doc: &Document, value: Option<&Value>) -> ConfigResult<Self> {
        let options = parse_options::<DropdownOptions>("DropdownButton", value, true)?;
        Ok(Self::new(doc, options))
    }

    fn upgrade(weak: &WeakState) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn with_state<R>(&self, op: &str, f: impl FnOnce(&mut DropdownState) -> R) -> Option<R> {
        let mut state = self.inner.borrow_mut();
        if state.destroyed {
            tracing::trace!("DropdownButton {}: {} ignored after destroy", state.id, op);
            return None;
        }
        Some(f(&mut state))
    }

    /// The container node wrapping trigger and menu.
    pub fn node(&self) -> NodeId {
        self.inner.borrow().node
    }

    pub fn menu(&self) -> NodeId {
        self.inner.borrow().menu
    }

    pub fn trigger(&self) -> Button {
        self.inner.borrow().trigger.clone()
    }

    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    /// Rendered item nodes, parallel to `config().items`.
    pub fn item_nodes(&self) -> Vec<NodeId> {
        self.inner.borrow().item_nodes.clone()
    }

    pub fn state(&self) -> MenuState {
        self.inner.borrow().state
    }

    pub fn is_open(&self) -> bool {
        self.state() == MenuState::Open
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().destroyed
    }

    pub fn config(&self) -> DropdownConfig {
        let state = self.inner.borrow();
        DropdownConfig {
            button: state.trigger.config(),
            items: state.items.clone(),
            position: state.position,
            trigger: state.trigger_mode,
        }
    }

    /// Show the menu, place it and focus the first enabled item.
    pub fn open(&self) {
        let focus = self.with_state("open", |state| {
            if state.state == MenuState::Open {
                return None;
            }
            state.state = MenuState::Open;
            state.doc.add_class(state.menu, MENU_SHOW_CLASS);
            state.apply_placement();
            tracing::trace!("DropdownButton {} opened", state.id);
            state
                .navigable_nodes()
                .first()
                .map(|&node| (state.doc.clone(), node))
        });
        if let Some((doc, node)) = focus.flatten() {
            doc.focus(node);
        }
    }

    pub fn close(&self) {
        self.with_state("close", |state| {
            if state.state == MenuState::Closed {
                return;
            }
            state.state = MenuState::Closed;
            state.doc.remove_class(state.menu, MENU_SHOW_CLASS);
            tracing::trace!("DropdownButton {} closed", state.id);
        });
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move focus one enabled item forward or back, wrapping. Only while open.
    pub fn focus_item(&self, direction: FocusDirection) {
        let target = self.with_state("focus_item", |state| {
            if state.state != MenuState::Open {
                return None;
            }
            let nodes = state.navigable_nodes();
            let current = state
                .doc
                .active_element()
                .and_then(|active| nodes.iter().position(|&node| node == active));
            navigation::step(current, nodes.len(), direction).map(|index| (state.doc.clone(), nodes[index]))
        });
        if let Some((doc, node)) = target.flatten() {
            doc.focus(node);
        }
    }

    /// Insert an item at `index`, or append when absent or past the end.
    pub fn add_item(&self, item: MenuItem, index: Option<usize>) {
        self.with_state("add_item", |state| {
            let len = state.items.len();
            let at = index.filter(|&i| i <= len).unwrap_or(len);
            let node = state.render_item(&item);
            let reference = state.item_nodes.get(at).copied();
            state.doc.insert_before(state.menu, node, reference);
            state.items.insert(at, item);
            state.item_nodes.insert(at, node);
            state.reindex();
        });
    }

    /// Remove the item at `index`. `false` when out of bounds.
    pub fn remove_item(&self, index: usize) -> bool {
        self.with_state("remove_item", |state| {
            if index >= state.items.len() {
                return false;
            }
            state.items.remove(index);
            let node = state.item_nodes.remove(index);
            state.doc.release(node);
            state.reindex();
            true
        })
        .unwrap_or(false)
    }

    /// Replace the item at `index`, re-rendering its node. `false` when out of
    /// bounds.
    pub fn update_item(&self, index: usize, item: MenuItem) -> bool {
        self.with_state("update_item", |state| {
            if index >= state.items.len() {
                return false;
            }
            let node = state.render_item(&item);
            let old = std::mem::replace(&mut state.item_nodes[index], node);
            state.doc.insert_before(state.menu, node, Some(old));
            state.doc.release(old);
            state.items[index] = item;
            state.reindex();
            true
        })
        .unwrap_or(false)
    }

    /// Merge a partial configuration.
    ///
    /// Button fields go to the trigger. Items re-render the menu, position
    /// updates the menu class and placement, and a trigger mode change swaps
    /// the hover listeners.
    pub fn update_config(&self, options: DropdownOptions) {
        let changes = options.changes();
        let weak = Rc::downgrade(&self.inner);
        let DropdownOptions {
            button,
            items,
            position,
            trigger,
        } = options;

        let Some(trigger_button) = self.with_state("update_config", |state| {
            if let Some(items) = items {
                state.items = items;
                state.render_items();
            }
            if let Some(position) = position {
                state.position = position;
                let class_name = state.menu_class_name();
                state.doc.set_class_name(state.menu, &class_name);
                if state.state == MenuState::Open {
                    state.apply_placement();
                }
            }
            if let Some(trigger) = trigger {
                state.trigger_mode = trigger;
                state.attach_hover_listeners(&weak);
            }
            state.trigger.clone()
        }) else {
            return;
        };

        if button != ButtonOptions::default() {
            trigger_button.update_config(button);
        }
        tracing::trace!("DropdownButton updated: {:?}", changes);
    }

    /// Detach the outside-click listener and every element listener, destroy
    /// the trigger and detach the container. Idempotent.
    pub fn destroy(&self) {
        let trigger = self.with_state("destroy", |state| {
            let doc = state.doc.clone();
            state.handlers.unregister(&doc, &Handler::OutsideClick);
            let detached = state.handlers.len();
            state.handlers.clear(&doc);
            doc.detach(state.node);
            state.destroyed = true;
            tracing::debug!("DropdownButton {} destroyed ({} element handlers)", state.id, detached);
            state.trigger.clone()
        });
        if let Some(trigger) = trigger {
            trigger.destroy();
        }
    }
}

impl PartialEq for DropdownButton {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for DropdownButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("DropdownButton")
            .field("id", &state.id)
            .field("state", &state.state)
            .field("items", &state.items.len())
            .field("destroyed", &state.destroyed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(doc: &Document, items: Vec<MenuItem>) -> DropdownButton {
        let dropdown = DropdownButton::new(
            doc,
            DropdownOptions::new()
                .button(ButtonOptions::new().text("Actions"))
                .items(items),
        );
        doc.append_child(doc.body(), dropdown.node());
        dropdown
    }

    #[test]
    fn test_structure() {
        let doc = Document::new();
        let dropdown = mounted(&doc, vec![MenuItem::entry("A"), MenuItem::divider(), MenuItem::entry("B")]);
        let node = dropdown.node();

        assert_eq!(doc.class_name(node), "smart-dropdown");
        assert_eq!(doc.children(node), vec![dropdown.trigger().node(), dropdown.menu()]);
        assert_eq!(
            doc.class_name(dropdown.menu()),
            "smart-dropdown__menu smart-dropdown__menu--bottom"
        );

        let items = dropdown.item_nodes();
        assert!(doc.has_class(items[1], DIVIDER_CLASS));
        assert_eq!(doc.attribute(items[2], "data-index").as_deref(), Some("2"));
        assert_eq!(doc.attribute(items[1], "data-index"), None);
    }

    #[test]
    fn test_open_focuses_first_enabled_item() {
        let doc = Document::new();
        let dropdown = mounted(
            &doc,
            vec![MenuItem::entry("A").enabled(false), MenuItem::divider(), MenuItem::entry("B")],
        );
        dropdown.open();
        assert_eq!(doc.active_element(), Some(dropdown.item_nodes()[2]));
    }

    #[test]
    fn test_navigation_requires_open_menu() {
        let doc = Document::new();
        let dropdown = mounted(&doc, vec![MenuItem::entry("A"), MenuItem::entry("B")]);
        dropdown.focus_item(FocusDirection::Next);
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_menu_class_keeps_show_on_position_change() {
        let doc = Document::new();
        let dropdown = mounted(&doc, vec![MenuItem::entry("A")]);
        dropdown.open();
        dropdown.update_config(DropdownOptions::new().position(MenuPosition::Top));

        let menu = dropdown.menu();
        assert!(doc.has_class(menu, MENU_SHOW_CLASS));
        assert!(doc.has_class(menu, "smart-dropdown__menu--top"));
        assert_eq!(doc.style(menu, "bottom").as_deref(), Some("100%"));
        assert_eq!(doc.style(menu, "top"), None);
    }
}
