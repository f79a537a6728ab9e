//! Document-wide theming through CSS custom properties.
//!
//! A [`Theme`] is applied to the document root as `--sb-*` variables that
//! the external stylesheet reads.
//!
//! # Example
//!
//! ```
//! use smart_buttons::theme::{apply_theme, Theme};
//! use smart_buttons_dom::Document;
//!
//! let doc = Document::new();
//! let theme = Theme::builder().primary("#6200ee").border_radius("4px").build();
//! apply_theme(&doc, &theme);
//!
//! assert_eq!(doc.style(doc.root(), "--sb-primary").as_deref(), Some("#6200ee"));
//! ```

use serde::Deserialize;
use smart_buttons_dom::Document;

use crate::button::ButtonType;

/// Colors for the eight colored button types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
    pub light: String,
    pub dark: String,
}

impl ColorScheme {
    pub fn light() -> Self {
        Self {
            primary: "#007bff".into(),
            secondary: "#6c757d".into(),
            success: "#28a745".into(),
            warning: "#ffc107".into(),
            danger: "#dc3545".into(),
            info: "#17a2b8".into(),
            light: "#f8f9fa".into(),
            dark: "#343a40".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: "#3d8bfd".into(),
            secondary: "#adb5bd".into(),
            success: "#48c774".into(),
            warning: "#ffd24d".into(),
            danger: "#f14668".into(),
            info: "#3ec1d3".into(),
            light: "#495057".into(),
            dark: "#121416".into(),
        }
    }

    /// Color for a button type. Ghost, gradient and 3d buttons use the
    /// primary color.
    pub fn get(&self, ty: ButtonType) -> &str {
        match ty {
            ButtonType::Secondary => &self.secondary,
            ButtonType::Success => &self.success,
            ButtonType::Warning => &self.warning,
            ButtonType::Danger => &self.danger,
            ButtonType::Info => &self.info,
            ButtonType::Light => &self.light,
            ButtonType::Dark => &self.dark,
            ButtonType::Primary | ButtonType::Ghost | ButtonType::Gradient | ButtonType::ThreeD => {
                &self.primary
            }
        }
    }

    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("danger", self.danger.as_str()),
            ("info", self.info.as_str()),
            ("light", self.light.as_str()),
            ("dark", self.dark.as_str()),
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

/// A named color scheme with shape and font settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub colors: ColorScheme,
    pub border_radius: String,
    pub font_family: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".into(),
            colors: ColorScheme::light(),
            border_radius: "0.375rem".into(),
            font_family: "system-ui, -apple-system, sans-serif".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            colors: ColorScheme::dark(),
            ..Self::light()
        }
    }

    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Builder for custom themes, starting from the light theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self { theme: Theme::dark() }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.theme.name = name.into();
        self
    }

    pub fn primary(mut self, color: impl Into<String>) -> Self {
        self.theme.colors.primary = color.into();
        self
    }

    pub fn secondary(mut self, color: impl Into<String>) -> Self {
        self.theme.colors.secondary = color.into();
        self
    }

    pub fn danger(mut self, color: impl Into<String>) -> Self {
        self.theme.colors.danger = color.into();
        self
    }

    pub fn colors(mut self, colors: ColorScheme) -> Self {
        self.theme.colors = colors;
        self
    }

    pub fn border_radius(mut self, radius: impl Into<String>) -> Self {
        self.theme.border_radius = radius.into();
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.theme.font_family = family.into();
        self
    }

    pub fn build(self) -> Theme {
        self.theme
    }
}

/// Publish the theme as custom properties on the document root.
pub fn apply_theme(doc: &Document, theme: &Theme) {
    let root = doc.root();
    for (name, color) in theme.colors.entries() {
        doc.set_style(root, &format!("--sb-{}", name), color);
    }
    doc.set_style(root, "--sb-font-family", &theme.font_family);
    doc.set_style(root, "--sb-border-radius", &theme.border_radius);
    tracing::debug!("Applied theme '{}'", theme.name);
}
