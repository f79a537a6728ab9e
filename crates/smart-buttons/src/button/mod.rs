//! The configurable button widget.
//!
//! A [`Button`] is a cheap, clonable handle. All clones refer to the same
//! widget; listeners attached to the document hold weak references back to it.
//!
//! # Example
//!
//! ```
//! use smart_buttons::button::{Button, ButtonOptions, ButtonSize, ButtonType};
//! use smart_buttons_dom::Document;
//!
//! let doc = Document::new();
//! let button = Button::new(
//!     &doc,
//!     ButtonOptions::new()
//!         .ty(ButtonType::Danger)
//!         .size(ButtonSize::Lg)
//!         .text("Delete"),
//! );
//! doc.append_child(doc.body(), button.node());
//!
//! assert!(doc.has_class(button.node(), "smart-button--danger"));
//! assert_eq!(doc.text_content(button.node()), "Delete");
//! ```

mod config;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use serde_json::Value;
use smart_buttons_core::profiling::profile_function;
use smart_buttons_dom::{Document, Event, EventTarget, EventType, NodeId};

use crate::callback::Callback;
use crate::changes::ConfigChanges;
use crate::config::parse_options;
use crate::error::ConfigResult;
use crate::registry::HandlerRegistry;
use crate::visual;

pub use config::{
    ButtonConfig, ButtonOptions, ButtonShape, ButtonSize, ButtonType, Dimension, EffectKind, EffectSpec,
    GradientDirection, GradientSpec, IconPosition, IconSpec, Intensity, SpinnerKind,
};

type WeakState = Weak<RefCell<ButtonState>>;

struct ButtonState {
    doc: Document,
    id: String,
    config: ButtonConfig,
    node: NodeId,
    label: Option<NodeId>,
    icon: Option<NodeId>,
    spinner: Option<NodeId>,
    loading_label: Option<NodeId>,
    handlers: HandlerRegistry<EventType>,
    destroyed: bool,
}

impl ButtonState {
    /// Populate `self.node` from the configuration.
    fn render(&mut self) {
        profile_function!();
        let doc = self.doc.clone();
        let node = self.node;

        doc.set_class_name(node, &visual::button_class_name(&self.config));
        doc.set_attribute(node, "id", &self.id);
        doc.set_attribute(node, "type", "button");
        doc.set_disabled(node, self.config.disabled || self.config.loading);

        self.label = None;
        self.icon = None;
        self.spinner = None;
        self.loading_label = None;

        if !self.config.text.is_empty() {
            let label = doc.create_text(&self.config.text);
            doc.append_child(node, label);
            self.label = Some(label);
        }
        visual::apply_inline_styles(&doc, node, &self.config);
        self.mount_icon();
        visual::apply_effect(&doc, node, &self.config.effect);
        if self.config.loading {
            self.mount_spinner();
        }
    }

    /// Replace the node with a freshly rendered one at the same position.
    fn rebuild(&mut self) {
        let doc = self.doc.clone();
        let old = self.node;
        let parent = doc.parent(old);
        let next = doc.next_sibling(old);
        let rect = doc.bounding_rect(old);

        doc.detach(old);
        self.node = doc.create_element("button");
        self.render();
        self.handlers.retarget(&doc, old, self.node);
        doc.set_bounding_rect(self.node, rect);
        doc.release(old);

        if let Some(parent) = parent {
            doc.insert_before(parent, self.node, next);
        }
        tracing::debug!("Button {} rebuilt", self.id);
    }

    /// Re-apply the non-structural fields named in `changes`.
    ///
    /// `previous_style` is the custom style map before the merge; its keys
    /// missing from the new map are cleared from the node.
    fn patch(&mut self, changes: ConfigChanges, previous_style: Option<&IndexMap<String, String>>) {
        let doc = self.doc.clone();
        if changes.contains(ConfigChanges::TEXT) {
            self.apply_text();
        }
        if changes.intersects(ConfigChanges::DISABLED | ConfigChanges::LOADING) {
            self.apply_loading();
        }
        if changes.requires_restyle() {
            if let Some(previous) = previous_style {
                let current = self.config.custom_style.as_ref();
                for key in previous.keys().filter(|key| !current.is_some_and(|map| map.contains_key(*key))) {
                    doc.remove_style(self.node, &visual::css_property_name(key));
                }
            }
            visual::apply_inline_styles(&doc, self.node, &self.config);
        }
        if changes.contains(ConfigChanges::ICON) {
            self.unmount_icon();
            self.mount_icon();
            let stacked = self.config.icon.as_ref().is_some_and(|icon| icon.position.is_stacked());
            if self.label.is_none() && !stacked && !self.config.text.is_empty() {
                self.apply_text();
            }
        }
        if changes.contains(ConfigChanges::CLASS) {
            doc.set_class_name(self.node, &visual::button_class_name(&self.config));
        }
    }

    fn apply_text(&mut self) {
        let doc = self.doc.clone();
        if let Some(label) = self.label.filter(|&label| doc.exists(label)) {
            doc.set_text_content(label, &self.config.text);
            return;
        }
        let label = doc.create_text(&self.config.text);
        let reference = match (self.icon, &self.config.icon) {
            (Some(icon), Some(spec)) if spec.position.is_leading() => doc.next_sibling(icon),
            (Some(icon), Some(_)) => Some(icon),
            _ => doc.first_child(self.node),
        };
        doc.insert_before(self.node, label, reference);
        self.label = Some(label);
    }

    fn apply_loading(&mut self) {
        let doc = self.doc.clone();
        let loading_class = visual::modifier_class("loading");
        self.unmount_spinner();
        if self.config.loading {
            doc.add_class(self.node, &loading_class);
            self.mount_spinner();
        } else {
            doc.remove_class(self.node, &loading_class);
        }
        doc.set_disabled(self.node, self.config.disabled || self.config.loading);
    }

    fn mount_icon(&mut self) {
        let Some(spec) = self.config.icon.clone() else {
            return;
        };
        let doc = self.doc.clone();
        let icon = visual::create_icon(&doc, &spec);
        doc.add_class(icon, &format!("smart-button__icon--{}", spec.position.as_str()));

        if spec.position.is_stacked()
            && let Some(label) = self.label.take()
        {
            doc.release(label);
        }
        if spec.position.is_leading() {
            doc.insert_before(self.node, icon, doc.first_child(self.node));
        } else {
            doc.append_child(self.node, icon);
        }
        self.icon = Some(icon);
    }

    fn unmount_icon(&mut self) {
        if let Some(icon) = self.icon.take() {
            self.doc.release(icon);
        }
    }

    fn mount_spinner(&mut self) {
        let doc = self.doc.clone();
        let spinner = visual::create_spinner(&doc, self.config.spinner);
        doc.append_child(self.node, spinner);
        self.spinner = Some(spinner);

        if let Some(text) = &self.config.loading_text {
            let label = visual::create_loading_text(&doc, Some(text));
            doc.append_child(self.node, label);
            self.loading_label = Some(label);
        }
    }

    fn unmount_spinner(&mut self) {
        for node in [self.spinner.take(), self.loading_label.take()].into_iter().flatten() {
            self.doc.release(node);
        }
    }

    /// Register the handlers backing the configured callbacks.
    fn attach_config_listeners(&mut self, weak: &WeakState) {
        let doc = self.doc.clone();
        let target = EventTarget::Node(self.node);

        if self.config.on_click.is_some() {
            let weak = weak.clone();
            self.handlers.register(
                &doc,
                EventType::Click,
                target,
                EventType::Click,
                Rc::new(move |event: &mut Event| handle_click(&weak, event)),
            );
        }

        let forwarded: [(EventType, fn(&ButtonConfig) -> Option<Callback>); 3] = [
            (EventType::MouseEnter, |config: &ButtonConfig| config.on_hover.clone()),
            (EventType::Focus, |config: &ButtonConfig| config.on_focus.clone()),
            (EventType::Blur, |config: &ButtonConfig| config.on_blur.clone()),
        ];
        for (event_type, pick) in forwarded {
            if pick(&self.config).is_none() {
                continue;
            }
            let weak = weak.clone();
            self.handlers.register(
                &doc,
                event_type.clone(),
                target,
                event_type,
                Rc::new(move |event: &mut Event| {
                    let callback = weak.upgrade().and_then(|inner| {
                        let state = inner.borrow();
                        if state.destroyed { None } else { pick(&state.config) }
                    });
                    if let Some(callback) = callback {
                        callback.call(event);
                    }
                }),
            );
        }
    }
}

/// Click handling: ripple feedback first, then the configured callback.
fn handle_click(weak: &WeakState, event: &mut Event) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let (doc, node, ripple, callback) = {
        let state = inner.borrow();
        if state.destroyed {
            return;
        }
        let ripple = matches!(state.config.effect.kind, EffectKind::Ripple).then(|| state.config.ripple_color.clone());
        (state.doc.clone(), state.node, ripple, state.config.on_click.clone())
    };
    if let Some(color) = ripple {
        visual::create_ripple(&doc, node, event.pointer(), color.as_deref());
    }
    if let Some(callback) = callback {
        callback.call(event);
    }
}

/// A styled, interactive button.
#[derive(Clone)]
pub struct Button {
    inner: Rc<RefCell<ButtonState>>,
}

impl Button {
    /// Build a button from partial options merged over the defaults.
    pub fn new(doc: &Document, options: ButtonOptions) -> Self {
        Self::with_config(doc, ButtonConfig::from_options(options))
    }

    /// Build a button from a loosely-typed configuration.
    ///
    /// `None` builds a default button. Anything but an object fails.
    pub fn from_value(doc: &Document, value: Option<&Value>) -> ConfigResult<Self> {
        let options = parse_options::<ButtonOptions>("Button", value, false)?;
        Ok(Self::new(doc, options))
    }

    /// Build a button from a complete configuration.
    pub fn with_config(doc: &Document, config: ButtonConfig) -> Self {
        let inner = Rc::new(RefCell::new(ButtonState {
            doc: doc.clone(),
            id: visual::generate_id(),
            config,
            node: doc.create_element("button"),
            label: None,
            icon: None,
            spinner: None,
            loading_label: None,
            handlers: HandlerRegistry::new(),
            destroyed: false,
        }));
        {
            let weak = Rc::downgrade(&inner);
            let mut state = inner.borrow_mut();
            state.render();
            state.attach_config_listeners(&weak);
            tracing::debug!("Button {} created ({:?})", state.id, state.config.ty);
        }
        Self { inner }
    }

    /// Run `op` unless the button has been destroyed.
    fn with_state<R>(&self, op: &str, f: impl FnOnce(&mut ButtonState) -> R) -> Option<R> {
        let mut state = self.inner.borrow_mut();
        if state.destroyed {
            tracing::trace!("Button {}: {} ignored after destroy", state.id, op);
            return None;
        }
        Some(f(&mut state))
    }

    /// The button's root node. Changes when a structural update rebuilds it.
    pub fn node(&self) -> NodeId {
        self.inner.borrow().node
    }

    /// The generated `sb_…` id, also set as the node's `id` attribute.
    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    pub fn document(&self) -> Document {
        self.inner.borrow().doc.clone()
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ButtonConfig {
        self.inner.borrow().config.clone()
    }

    pub fn is_destroyed(&self) -> bool {
        self.inner.borrow().destroyed
    }

    /// Whether two handles refer to the same button.
    pub fn ptr_eq(&self, other: &Button) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Replace the label text, keeping icon and spinner.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.with_state("set_text", |state| {
            state.config.text = text;
            state.apply_text();
        });
    }

    /// Enable or disable the control. A loading button stays disabled.
    pub fn set_enabled(&self, enabled: bool) {
        self.with_state("set_enabled", |state| {
            state.config.disabled = !enabled;
            state
                .doc
                .set_disabled(state.node, state.config.disabled || state.config.loading);
        });
    }

    /// Toggle the loading state: class, forced disabled state and spinner.
    pub fn set_loading(&self, loading: bool) {
        self.with_state("set_loading", |state| {
            if state.config.loading == loading && (state.spinner.is_some() == loading) {
                return;
            }
            state.config.loading = loading;
            state.apply_loading();
        });
    }

    pub fn set_type(&self, ty: ButtonType) {
        self.with_state("set_type", |state| {
            let doc = &state.doc;
            doc.remove_class(state.node, &visual::modifier_class(state.config.ty.as_str()));
            doc.add_class(state.node, &visual::modifier_class(ty.as_str()));
            state.config.ty = ty;
        });
    }

    pub fn set_size(&self, size: ButtonSize) {
        self.with_state("set_size", |state| {
            let doc = &state.doc;
            doc.remove_class(state.node, &visual::modifier_class(state.config.size.as_str()));
            doc.add_class(state.node, &visual::modifier_class(size.as_str()));
            state.config.size = size;
        });
    }

    pub fn set_shape(&self, shape: ButtonShape) {
        self.with_state("set_shape", |state| {
            let doc = &state.doc;
            doc.remove_class(state.node, &visual::modifier_class(state.config.shape.as_str()));
            doc.add_class(state.node, &visual::modifier_class(shape.as_str()));
            state.config.shape = shape;
        });
    }

    /// Swap the interaction effect. Accepts an [`EffectKind`] or a full
    /// [`EffectSpec`].
    pub fn set_effect(&self, effect: impl Into<EffectSpec>) {
        let effect = effect.into();
        self.with_state("set_effect", |state| {
            visual::remove_effect(&state.doc, state.node, &state.config.effect);
            visual::apply_effect(&state.doc, state.node, &effect);
            state.config.effect = effect;
        });
    }

    /// Merge a partial configuration.
    ///
    /// Type, size, shape or effect rebuild the node in place. Other fields are
    /// patched onto the existing node.
    pub fn update_config(&self, options: ButtonOptions) {
        let weak = Rc::downgrade(&self.inner);
        self.with_state("update_config", |state| {
            let previous_style = state.config.custom_style.clone();
            let changes = state.config.merge(options);
            if changes.requires_rebuild() {
                state.rebuild();
            } else {
                state.patch(changes, previous_style.as_ref());
            }
            if changes.requires_rebuild() || changes.contains(ConfigChanges::CALLBACKS) {
                state.attach_config_listeners(&weak);
            }
        });
    }

    /// Attach a handler for `event_type`, replacing any handler already
    /// registered for it (including one backing a configured callback).
    pub fn add_event_listener<F>(&self, event_type: EventType, handler: F)
    where
        F: Fn(&mut Event) + 'static,
    {
        self.with_state("add_event_listener", |state| {
            let doc = state.doc.clone();
            let target = EventTarget::Node(state.node);
            state
                .handlers
                .register(&doc, event_type.clone(), target, event_type, Rc::new(handler));
        });
    }

    /// Whether a handler (custom or configured) is attached for `event_type`.
    pub fn has_event_listener(&self, event_type: &EventType) -> bool {
        self.with_state("has_event_listener", |state| state.handlers.contains(event_type))
            .unwrap_or(false)
    }

    pub fn remove_event_listener(&self, event_type: &EventType) -> bool {
        self.with_state("remove_event_listener", |state| {
            let doc = state.doc.clone();
            state.handlers.unregister(&doc, event_type)
        })
        .unwrap_or(false)
    }

    /// Dispatch a bubbling custom event from the button node.
    ///
    /// Returns `false` when a listener prevented the default action.
    pub fn dispatch_event(&self, name: &str, detail: Option<&str>) -> bool {
        let Some((doc, node)) = self.with_state("dispatch_event", |state| (state.doc.clone(), state.node)) else {
            return false;
        };
        let mut event = Event::custom(name, node);
        if let Some(detail) = detail {
            event = event.with_detail(detail);
        }
        doc.dispatch(&mut event);
        !event.is_default_prevented()
    }

    /// Detach every handler and remove the node from its parent. Idempotent.
    pub fn destroy(&self) {
        self.with_state("destroy", |state| {
            let doc = state.doc.clone();
            state.handlers.clear(&doc);
            doc.detach(state.node);
            state.destroyed = true;
            tracing::debug!("Button {} destroyed", state.id);
        });
    }
}

impl PartialEq for Button {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Button")
            .field("id", &state.id)
            .field("node", &state.node)
            .field("destroyed", &state.destroyed)
            .finish()
    }
}
