//! A laid-out row or column of owned buttons.

use serde::Deserialize;
use serde_json::Value;
use smart_buttons_core::profiling::profile_function;
use smart_buttons_dom::{Document, NodeId};

use crate::button::{Button, ButtonOptions, ButtonSize, ButtonType};
use crate::changes::ConfigChanges;
use crate::config::parse_options;
use crate::error::ConfigResult;
use crate::visual;

pub const GROUP_CLASS: &str = "smart-button-group";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    fn flex_direction(&self) -> &'static str {
        match self {
            Direction::Horizontal => "row",
            Direction::Vertical => "column",
        }
    }
}

/// Cross-axis alignment of the buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    fn align_items(&self) -> &'static str {
        match self {
            Alignment::Start => "flex-start",
            Alignment::Center => "center",
            Alignment::End => "flex-end",
        }
    }
}

/// Complete group configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGroupConfig {
    /// Options of the owned buttons, in order.
    pub buttons: Vec<ButtonOptions>,
    pub direction: Direction,
    /// CSS gap between buttons.
    pub spacing: String,
    pub alignment: Alignment,
    pub wrap: bool,
}

impl ButtonGroupConfig {
    pub const DEFAULT_SPACING: &'static str = "0.5rem";

    pub fn from_options(options: ButtonGroupOptions) -> Self {
        let mut config = Self::default();
        config.merge(options);
        config
    }

    pub fn merge(&mut self, options: ButtonGroupOptions) -> ConfigChanges {
        let mut changes = ConfigChanges::NONE;
        if let Some(buttons) = options.buttons {
            self.buttons = buttons;
            changes |= ConfigChanges::BUTTONS;
        }
        if let Some(direction) = options.direction {
            self.direction = direction;
            changes |= ConfigChanges::DIRECTION;
        }
        if let Some(spacing) = options.spacing {
            self.spacing = spacing;
            changes |= ConfigChanges::SPACING;
        }
        if let Some(alignment) = options.alignment {
            self.alignment = alignment;
            changes |= ConfigChanges::ALIGNMENT;
        }
        if let Some(wrap) = options.wrap {
            self.wrap = wrap;
            changes |= ConfigChanges::WRAP;
        }
        changes
    }
}

impl Default for ButtonGroupConfig {
    fn default() -> Self {
        Self {
            buttons: Vec::new(),
            direction: Direction::Horizontal,
            spacing: Self::DEFAULT_SPACING.to_string(),
            alignment: Alignment::Start,
            wrap: false,
        }
    }
}

/// Partial group configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonGroupOptions {
    pub buttons: Option<Vec<ButtonOptions>>,
    pub direction: Option<Direction>,
    pub spacing: Option<String>,
    pub alignment: Option<Alignment>,
    pub wrap: Option<bool>,
}

impl ButtonGroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buttons(mut self, buttons: impl IntoIterator<Item = ButtonOptions>) -> Self {
        self.buttons = Some(buttons.into_iter().collect());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }
}

/// An ordered set of buttons sharing one flex container.
///
/// The group owns its buttons: removing a button or destroying the group
/// destroys them.
#[derive(Debug)]
pub struct ButtonGroup {
    doc: Document,
    id: String,
    config: ButtonGroupConfig,
    node: NodeId,
    buttons: Vec<Button>,
    destroyed: bool,
}

impl ButtonGroup {
    pub fn new(doc: &Document, options: ButtonGroupOptions) -> Self {
        profile_function!();
        let config = ButtonGroupConfig::from_options(options);
        let node = doc.create_element("div");
        let mut group = Self {
            doc: doc.clone(),
            id: visual::generate_id(),
            config,
            node,
            buttons: Vec::new(),
            destroyed: false,
        };

        doc.set_attribute(node, "id", &group.id);
        doc.set_style(node, "display", "inline-flex");
        group.apply_layout();

        for options in group.config.buttons.clone() {
            let button = Button::new(doc, options);
            doc.append_child(node, button.node());
            group.buttons.push(button);
        }
        tracing::debug!("ButtonGroup {} created with {} buttons", group.id, group.buttons.len());
        group
    }

    /// Build a group from a loosely-typed configuration. The configuration
    /// is required.
    pub fn from_value(doc: &Document, value: Option<&Value>) -> ConfigResult<Self> {
        let options = parse_options::<ButtonGroupOptions>("ButtonGroup", value, true)?;
        Ok(Self::new(doc, options))
    }

    fn apply_layout(&self) {
        let doc = &self.doc;
        let class_name = visual::merge_classes([
            Some(GROUP_CLASS),
            (self.config.direction == Direction::Vertical).then_some("smart-button-group--vertical"),
        ]);
        doc.set_class_name(self.node, &class_name);
        doc.set_style(self.node, "flex-direction", self.config.direction.flex_direction());
        doc.set_style(self.node, "align-items", self.config.alignment.align_items());
        doc.set_style(self.node, "gap", &self.config.spacing);
        doc.set_style(self.node, "flex-wrap", if self.config.wrap { "wrap" } else { "nowrap" });
    }

    fn is_live(&self, op: &str) -> bool {
        if self.destroyed {
            tracing::trace!("ButtonGroup {}: {} ignored after destroy", self.id, op);
        }
        !self.destroyed
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> ButtonGroupConfig {
        self.config.clone()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Create a button and insert it at `index`, or append it when the index
    /// is absent or past the end. Returns a handle to the new button.
    pub fn add_button(&mut self, options: ButtonOptions, index: Option<usize>) -> Option<Button> {
        if !self.is_live("add_button") {
            return None;
        }
        let button = Button::new(&self.doc, options.clone());
        let at = index.filter(|&i| i <= self.buttons.len()).unwrap_or(self.buttons.len());
        let reference = self.buttons.get(at).map(Button::node);

        self.doc.insert_before(self.node, button.node(), reference);
        self.buttons.insert(at, button.clone());
        self.config.buttons.insert(at.min(self.config.buttons.len()), options);
        Some(button)
    }

    /// Destroy and drop the button at `index`. `false` when out of bounds.
    pub fn remove_button(&mut self, index: usize) -> bool {
        if !self.is_live("remove_button") || index >= self.buttons.len() {
            return false;
        }
        let button = self.buttons.remove(index);
        button.destroy();
        if index < self.config.buttons.len() {
            self.config.buttons.remove(index);
        }
        true
    }

    pub fn get_button(&self, index: usize) -> Option<Button> {
        self.buttons.get(index).cloned()
    }

    /// Handles to every button, in order. Reordering the returned vector does
    /// not affect the group.
    pub fn get_buttons(&self) -> Vec<Button> {
        self.buttons.clone()
    }

    pub fn set_enabled(&self, enabled: bool) {
        if self.is_live("set_enabled") {
            self.buttons.iter().for_each(|button| button.set_enabled(enabled));
        }
    }

    pub fn set_type(&self, ty: ButtonType) {
        if self.is_live("set_type") {
            self.buttons.iter().for_each(|button| button.set_type(ty));
        }
    }

    pub fn set_size(&self, size: ButtonSize) {
        if self.is_live("set_size") {
            self.buttons.iter().for_each(|button| button.set_size(size));
        }
    }

    /// Merge layout options and re-apply them. Existing buttons are kept;
    /// a `buttons` list in `options` is ignored.
    pub fn update_config(&mut self, mut options: ButtonGroupOptions) {
        if !self.is_live("update_config") {
            return;
        }
        if options.buttons.take().is_some() {
            tracing::debug!("ButtonGroup {}: update_config keeps the existing buttons", self.id);
        }
        let changes = self.config.merge(options);
        if changes.intersects(ConfigChanges::LAYOUT_GROUP) {
            self.apply_layout();
        }
    }

    /// Destroy every button once and detach the container. Idempotent.
    pub fn destroy(&mut self) {
        if !self.is_live("destroy") {
            return;
        }
        for button in self.buttons.drain(..) {
            button.destroy();
        }
        self.doc.detach(self.node);
        self.destroyed = true;
        tracing::debug!("ButtonGroup {} destroyed", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(labels: &[&str]) -> ButtonGroupOptions {
        ButtonGroupOptions::new().buttons(labels.iter().map(|label| ButtonOptions::new().text(*label)))
    }

    #[test]
    fn test_layout_defaults() {
        let doc = Document::new();
        let group = ButtonGroup::new(&doc, labelled(&["A", "B"]));
        let node = group.node();

        assert_eq!(doc.class_name(node), "smart-button-group");
        assert_eq!(doc.style(node, "display").as_deref(), Some("inline-flex"));
        assert_eq!(doc.style(node, "flex-direction").as_deref(), Some("row"));
        assert_eq!(doc.style(node, "align-items").as_deref(), Some("flex-start"));
        assert_eq!(doc.style(node, "gap").as_deref(), Some("0.5rem"));
        assert_eq!(doc.style(node, "flex-wrap").as_deref(), Some("nowrap"));
        assert_eq!(doc.children(node).len(), 2);
    }

    #[test]
    fn test_update_config_relayouts_without_rebuilding() {
        let doc = Document::new();
        let mut group = ButtonGroup::new(&doc, labelled(&["A", "B"]));
        let before = group.get_buttons();

        group.update_config(
            ButtonGroupOptions::new()
                .direction(Direction::Vertical)
                .alignment(Alignment::End)
                .wrap(true),
        );

        let node = group.node();
        assert!(doc.has_class(node, "smart-button-group--vertical"));
        assert_eq!(doc.style(node, "flex-direction").as_deref(), Some("column"));
        assert_eq!(doc.style(node, "align-items").as_deref(), Some("flex-end"));
        assert_eq!(doc.style(node, "flex-wrap").as_deref(), Some("wrap"));
        assert_eq!(group.get_buttons(), before);
        assert_eq!(group.config().spacing, "0.5rem");
    }

    #[test]
    fn test_update_config_ignores_button_list() {
        let doc = Document::new();
        let mut group = ButtonGroup::new(&doc, labelled(&["A", "B"]));

        group.update_config(labelled(&["X"]).spacing("1rem"));

        assert_eq!(group.len(), 2);
        assert_eq!(group.config().buttons.len(), 2);
        assert_eq!(doc.style(group.node(), "gap").as_deref(), Some("1rem"));
    }

    #[test]
    fn test_config_tracks_buttons() {
        let doc = Document::new();
        let mut group = ButtonGroup::new(&doc, labelled(&["A", "C"]));
        group.add_button(ButtonOptions::new().text("B"), Some(1));
        group.remove_button(0);

        let texts: Vec<_> = group
            .config()
            .buttons
            .iter()
            .map(|options| options.text.clone().unwrap_or_default())
            .collect();
        assert_eq!(texts, vec!["B", "C"]);
    }
}
