//! Dropdown configuration and menu items.

use serde::Deserialize;
use smart_buttons_dom::Event;

use crate::button::{ButtonConfig, ButtonOptions};
use crate::callback::Callback;
use crate::changes::ConfigChanges;

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "MenuItemInput")]
pub enum MenuItem {
    /// Selectable entry.
    Action {
        label: String,
        icon: Option<String>,
        enabled: bool,
        on_click: Option<Callback>,
    },
    /// Visual separator line.
    Divider,
}

impl MenuItem {
    /// Create an action item.
    pub fn action<F>(label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn(&mut Event) + 'static,
    {
        Self::Action {
            label: label.into(),
            icon: None,
            enabled: true,
            on_click: Some(Callback::new(on_click)),
        }
    }

    /// Create an action item with no callback. Selecting it only closes the
    /// menu.
    pub fn entry(label: impl Into<String>) -> Self {
        Self::Action {
            label: label.into(),
            icon: None,
            enabled: true,
            on_click: None,
        }
    }

    pub fn divider() -> Self {
        Self::Divider
    }

    /// Set the enabled state (builder pattern).
    pub fn enabled(mut self, enabled: bool) -> Self {
        if let Self::Action { enabled: e, .. } = &mut self {
            *e = enabled;
        }
        self
    }

    /// Set the icon class (builder pattern).
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        if let Self::Action { icon: i, .. } = &mut self {
            *i = Some(icon.into());
        }
        self
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider)
    }

    /// Whether keyboard navigation and selection can land on this item.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Action { enabled, .. } => *enabled,
            Self::Divider => false,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Action { label, .. } => Some(label),
            Self::Divider => None,
        }
    }
}

#[derive(Deserialize)]
struct MenuItemInput {
    #[serde(default)]
    text: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    divider: bool,
}

impl From<MenuItemInput> for MenuItem {
    fn from(input: MenuItemInput) -> Self {
        if input.divider {
            return MenuItem::Divider;
        }
        MenuItem::Action {
            label: input.text,
            icon: input.icon,
            enabled: !input.disabled,
            on_click: None,
        }
    }
}

/// Where the menu opens relative to the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl MenuPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuPosition::Bottom => "bottom",
            MenuPosition::Top => "top",
            MenuPosition::Left => "left",
            MenuPosition::Right => "right",
        }
    }
}

/// What opens the menu besides clicking the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    #[default]
    Click,
    Hover,
}

/// Complete dropdown configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownConfig {
    /// Configuration of the trigger button.
    pub button: ButtonConfig,
    pub items: Vec<MenuItem>,
    pub position: MenuPosition,
    pub trigger: TriggerMode,
}

/// Partial dropdown configuration. Button fields sit at the top level next
/// to the dropdown's own keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DropdownOptions {
    #[serde(flatten)]
    pub button: ButtonOptions,
    pub items: Option<Vec<MenuItem>>,
    pub position: Option<MenuPosition>,
    pub trigger: Option<TriggerMode>,
}

impl DropdownOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(mut self, button: ButtonOptions) -> Self {
        self.button = button;
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items = Some(items.into_iter().collect());
        self
    }

    pub fn position(mut self, position: MenuPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn trigger(mut self, trigger: TriggerMode) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Dropdown-level fields present in this update.
    pub(crate) fn changes(&self) -> ConfigChanges {
        let mut changes = ConfigChanges::NONE;
        changes.mark(ConfigChanges::ITEMS, self.items.is_some());
        changes.mark(ConfigChanges::POSITION, self.position.is_some());
        changes.mark(ConfigChanges::TRIGGER, self.trigger.is_some());
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonType;
    use serde_json::json;

    #[test]
    fn test_item_builders() {
        let item = MenuItem::entry("Copy").icon("fa fa-copy").enabled(false);
        assert_eq!(item.label(), Some("Copy"));
        assert!(!item.is_enabled());
        assert!(!MenuItem::divider().is_enabled());
        assert!(MenuItem::divider().enabled(true).is_divider());
    }

    #[test]
    fn test_deserialize_items() {
        let items: Vec<MenuItem> = serde_json::from_value(json!([
            { "text": "Edit", "icon": "fa fa-pen" },
            { "divider": true },
            { "text": "Delete", "disabled": true },
        ]))
        .unwrap();

        assert_eq!(items[0], MenuItem::entry("Edit").icon("fa fa-pen"));
        assert!(items[1].is_divider());
        assert_eq!(items[2], MenuItem::entry("Delete").enabled(false));
    }

    #[test]
    fn test_deserialize_flattened_button_fields() {
        let options: DropdownOptions = serde_json::from_value(json!({
            "type": "secondary",
            "text": "Actions",
            "position": "left",
            "trigger": "hover",
            "items": [],
        }))
        .unwrap();

        assert_eq!(options.button.ty, Some(ButtonType::Secondary));
        assert_eq!(options.button.text.as_deref(), Some("Actions"));
        assert_eq!(options.position, Some(MenuPosition::Left));
        assert_eq!(options.trigger, Some(TriggerMode::Hover));
        assert_eq!(
            options.changes(),
            ConfigChanges::ITEMS | ConfigChanges::POSITION | ConfigChanges::TRIGGER
        );
    }
}
