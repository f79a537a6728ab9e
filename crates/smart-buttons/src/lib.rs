//! Configurable buttons, button groups and dropdown buttons for a
//! [`Document`](smart_buttons_dom::Document).
//!
//! Every widget is built from a partial configuration merged over defaults,
//! renders one root node, keeps at most one handler per event name, and can
//! be updated or destroyed at any time:
//!
//! - [`Button`]: styled control with icon, loading state and effects
//! - [`ButtonGroup`]: flex container owning an ordered list of buttons
//! - [`DropdownButton`]: trigger button plus a keyboard-navigable menu
//!
//! # Example
//!
//! ```
//! use smart_buttons::prelude::*;
//! use smart_buttons_dom::Document;
//!
//! let doc = Document::new();
//! let dropdown = DropdownButton::new(
//!     &doc,
//!     DropdownOptions::new()
//!         .button(ButtonOptions::new().text("Actions"))
//!         .items([MenuItem::entry("Edit"), MenuItem::divider(), MenuItem::entry("Delete")]),
//! );
//! doc.append_child(doc.body(), dropdown.node());
//!
//! doc.click(dropdown.trigger().node());
//! assert!(dropdown.is_open());
//! ```

pub mod button;
pub mod callback;
pub mod changes;
mod config;
pub mod dropdown;
pub mod error;
pub mod group;
mod registry;
pub mod theme;
pub mod visual;

pub use button::{Button, ButtonConfig, ButtonOptions};
pub use callback::Callback;
pub use changes::ConfigChanges;
pub use dropdown::{DropdownButton, DropdownConfig, DropdownOptions, MenuItem, MenuState};
pub use error::{ConfigError, ConfigResult};
pub use group::{ButtonGroup, ButtonGroupConfig, ButtonGroupOptions};
pub use theme::{Theme, apply_theme};

/// Common imports.
pub mod prelude {
    pub use crate::button::{
        Button, ButtonOptions, ButtonShape, ButtonSize, ButtonType, EffectKind, EffectSpec, GradientDirection,
        GradientSpec, IconPosition, IconSpec, Intensity, SpinnerKind,
    };
    pub use crate::dropdown::{DropdownButton, DropdownOptions, MenuItem, MenuPosition, MenuState, TriggerMode};
    pub use crate::error::{ConfigError, ConfigResult};
    pub use crate::group::{Alignment, ButtonGroup, ButtonGroupOptions, Direction};
    pub use crate::theme::{Theme, apply_theme};
}
