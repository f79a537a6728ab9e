//! Button configuration: value types, the complete [`ButtonConfig`] and the
//! partial [`ButtonOptions`] merged over it.

use indexmap::IndexMap;
use serde::Deserialize;
use smart_buttons_dom::Event;

use crate::callback::Callback;
use crate::changes::ConfigChanges;

/// Visual type of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Light,
    Dark,
    Ghost,
    Gradient,
    #[serde(rename = "3d")]
    ThreeD,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Primary => "primary",
            ButtonType::Secondary => "secondary",
            ButtonType::Success => "success",
            ButtonType::Warning => "warning",
            ButtonType::Danger => "danger",
            ButtonType::Info => "info",
            ButtonType::Light => "light",
            ButtonType::Dark => "dark",
            ButtonType::Ghost => "ghost",
            ButtonType::Gradient => "gradient",
            ButtonType::ThreeD => "3d",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Xs => "xs",
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
            ButtonSize::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShape {
    Square,
    #[default]
    Rounded,
    Pill,
    Circle,
}

impl ButtonShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonShape::Square => "square",
            ButtonShape::Rounded => "rounded",
            ButtonShape::Pill => "pill",
            ButtonShape::Circle => "circle",
        }
    }
}

/// Interaction effect kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Ripple,
    Bounce,
    Shake,
    Pulse,
    Glow,
    Float,
    #[default]
    None,
}

impl EffectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Ripple => "ripple",
            EffectKind::Bounce => "bounce",
            EffectKind::Shake => "shake",
            EffectKind::Pulse => "pulse",
            EffectKind::Glow => "glow",
            EffectKind::Float => "float",
            EffectKind::None => "none",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EffectKind::None)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl IconPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconPosition::Left => "left",
            IconPosition::Right => "right",
            IconPosition::Top => "top",
            IconPosition::Bottom => "bottom",
        }
    }

    /// Whether the icon goes before the label.
    pub fn is_leading(&self) -> bool {
        matches!(self, IconPosition::Left | IconPosition::Top)
    }

    /// Whether the icon replaces the label text.
    pub fn is_stacked(&self) -> bool {
        matches!(self, IconPosition::Top | IconPosition::Bottom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    #[default]
    ToRight,
    ToLeft,
    ToTop,
    ToBottom,
    ToTopRight,
    ToTopLeft,
    ToBottomRight,
    ToBottomLeft,
}

impl GradientDirection {
    /// CSS angle for the direction.
    pub fn angle(&self) -> &'static str {
        match self {
            GradientDirection::ToRight => "90deg",
            GradientDirection::ToLeft => "270deg",
            GradientDirection::ToTop => "0deg",
            GradientDirection::ToBottom => "180deg",
            GradientDirection::ToTopRight => "45deg",
            GradientDirection::ToTopLeft => "315deg",
            GradientDirection::ToBottomRight => "135deg",
            GradientDirection::ToBottomLeft => "225deg",
        }
    }
}

/// Loading indicator style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerKind {
    Dots,
    #[default]
    Spinner,
    Bars,
    Pulse,
}

impl SpinnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerKind::Dots => "dots",
            SpinnerKind::Spinner => "spinner",
            SpinnerKind::Bars => "bars",
            SpinnerKind::Pulse => "pulse",
        }
    }

    /// Number of child elements the indicator is drawn with.
    pub fn segments(&self) -> usize {
        match self {
            SpinnerKind::Dots | SpinnerKind::Pulse => 3,
            SpinnerKind::Bars => 4,
            SpinnerKind::Spinner => 0,
        }
    }
}

/// Icon configuration.
///
/// Deserializes from a bare icon name or from `{name, position, size, color}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "IconInput")]
pub struct IconSpec {
    pub name: String,
    pub position: IconPosition,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl IconSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: IconPosition::Left,
            size: None,
            color: None,
        }
    }

    pub fn position(mut self, position: IconPosition) -> Self {
        self.position = position;
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<&str> for IconSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IconInput {
    Name(String),
    Spec {
        name: String,
        #[serde(default)]
        position: IconPosition,
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
}

impl From<IconInput> for IconSpec {
    fn from(input: IconInput) -> Self {
        match input {
            IconInput::Name(name) => IconSpec::new(name),
            IconInput::Spec {
                name,
                position,
                size,
                color,
            } => IconSpec {
                name,
                position,
                size,
                color,
            },
        }
    }
}

/// Linear gradient background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradientSpec {
    pub colors: Vec<String>,
    #[serde(default)]
    pub direction: GradientDirection,
    /// Explicit angle in degrees; zero falls back to the direction.
    #[serde(default)]
    pub angle: Option<f32>,
}

impl GradientSpec {
    pub fn new<I, S>(colors: I, direction: GradientDirection) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
            direction,
            angle: None,
        }
    }

    pub fn angle(mut self, degrees: f32) -> Self {
        self.angle = Some(degrees);
        self
    }
}

/// Effect configuration.
///
/// Deserializes from a bare kind name or from `{type, duration, intensity,
/// color}`. A bare kind gets a 300 ms duration at medium intensity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "EffectInput")]
pub struct EffectSpec {
    pub kind: EffectKind,
    pub duration_ms: Option<u32>,
    pub intensity: Option<Intensity>,
    pub color: Option<String>,
}

impl EffectSpec {
    pub const DEFAULT_DURATION_MS: u32 = 300;

    /// No effect.
    pub fn none() -> Self {
        Self {
            kind: EffectKind::None,
            duration_ms: None,
            intensity: None,
            color: None,
        }
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Default for EffectSpec {
    fn default() -> Self {
        Self::none()
    }
}

impl From<EffectKind> for EffectSpec {
    fn from(kind: EffectKind) -> Self {
        if kind.is_none() {
            return Self::none();
        }
        Self {
            kind,
            duration_ms: Some(Self::DEFAULT_DURATION_MS),
            intensity: Some(Intensity::Medium),
            color: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EffectInput {
    Kind(EffectKind),
    Spec {
        #[serde(rename = "type")]
        kind: EffectKind,
        #[serde(default)]
        duration: Option<u32>,
        #[serde(default)]
        intensity: Option<Intensity>,
        #[serde(default)]
        color: Option<String>,
    },
}

impl From<EffectInput> for EffectSpec {
    fn from(input: EffectInput) -> Self {
        match input {
            EffectInput::Kind(kind) => kind.into(),
            EffectInput::Spec {
                kind,
                duration,
                intensity,
                color,
            } => EffectSpec {
                kind,
                duration_ms: duration,
                intensity,
                color,
            },
        }
    }
}

/// Width or height: a pixel count or any CSS length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f32),
    Css(String),
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Dimension::Px(px)
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Dimension::Css(css.to_string())
    }
}

/// Complete button configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    pub ty: ButtonType,
    pub size: ButtonSize,
    pub shape: ButtonShape,
    pub text: String,
    pub disabled: bool,
    pub loading: bool,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub icon: Option<IconSpec>,
    pub gradient: Option<GradientSpec>,
    pub effect: EffectSpec,
    pub on_click: Option<Callback>,
    pub on_hover: Option<Callback>,
    pub on_focus: Option<Callback>,
    pub on_blur: Option<Callback>,
    pub custom_class: Option<String>,
    /// Extra inline style properties, applied before the typed overrides.
    pub custom_style: Option<IndexMap<String, String>>,
    pub ripple_color: Option<String>,
    pub shadow_color: Option<String>,
    pub shadow_intensity: Intensity,
    pub loading_text: Option<String>,
    pub spinner: SpinnerKind,
}

impl ButtonConfig {
    pub const DEFAULT_TEXT: &'static str = "Smart Button";

    /// Defaults overridden by every field present in `options`.
    pub fn from_options(options: ButtonOptions) -> Self {
        let mut config = Self::default();
        config.merge(options);
        config
    }

    /// Shallow merge: present fields win, absent fields are kept.
    pub fn merge(&mut self, options: ButtonOptions) -> ConfigChanges {
        let mut changes = ConfigChanges::NONE;
        changes.mark(ConfigChanges::TYPE, options.ty.is_some());
        changes.mark(ConfigChanges::SIZE, options.size.is_some());
        changes.mark(ConfigChanges::SHAPE, options.shape.is_some());
        changes.mark(ConfigChanges::EFFECT, options.effect.is_some());
        changes.mark(ConfigChanges::TEXT, options.text.is_some());
        changes.mark(ConfigChanges::DISABLED, options.disabled.is_some());
        changes.mark(
            ConfigChanges::LOADING,
            options.loading.is_some() || options.loading_text.is_some() || options.spinner_type.is_some(),
        );
        changes.mark(
            ConfigChanges::COLORS,
            options.color.is_some() || options.background_color.is_some() || options.border_color.is_some(),
        );
        changes.mark(
            ConfigChanges::DIMENSIONS,
            options.width.is_some() || options.height.is_some(),
        );
        changes.mark(ConfigChanges::ICON, options.icon.is_some());
        changes.mark(ConfigChanges::GRADIENT, options.gradient.is_some());
        changes.mark(
            ConfigChanges::CALLBACKS,
            options.on_click.is_some()
                || options.on_hover.is_some()
                || options.on_focus.is_some()
                || options.on_blur.is_some(),
        );
        changes.mark(ConfigChanges::CLASS, options.custom_class.is_some());
        changes.mark(
            ConfigChanges::STYLE,
            options.custom_style.is_some()
                || options.ripple_color.is_some()
                || options.shadow_color.is_some()
                || options.shadow_intensity.is_some(),
        );

        macro_rules! take {
            ($field:ident) => {
                if let Some(value) = options.$field {
                    self.$field = value;
                }
            };
            ($field:ident => optional) => {
                if options.$field.is_some() {
                    self.$field = options.$field;
                }
            };
        }

        take!(ty);
        take!(size);
        take!(shape);
        take!(text);
        take!(disabled);
        take!(loading);
        take!(effect);
        take!(shadow_intensity);
        take!(color => optional);
        take!(background_color => optional);
        take!(border_color => optional);
        take!(width => optional);
        take!(height => optional);
        take!(icon => optional);
        take!(gradient => optional);
        take!(on_click => optional);
        take!(on_hover => optional);
        take!(on_focus => optional);
        take!(on_blur => optional);
        take!(custom_class => optional);
        take!(custom_style => optional);
        take!(ripple_color => optional);
        take!(shadow_color => optional);
        take!(loading_text => optional);
        if let Some(spinner) = options.spinner_type {
            self.spinner = spinner;
        }

        changes
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            ty: ButtonType::Primary,
            size: ButtonSize::Md,
            shape: ButtonShape::Rounded,
            text: Self::DEFAULT_TEXT.to_string(),
            disabled: false,
            loading: false,
            color: None,
            background_color: None,
            border_color: None,
            width: None,
            height: None,
            icon: None,
            gradient: None,
            effect: EffectSpec::none(),
            on_click: None,
            on_hover: None,
            on_focus: None,
            on_blur: None,
            custom_class: None,
            custom_style: None,
            ripple_color: None,
            shadow_color: None,
            shadow_intensity: Intensity::Medium,
            loading_text: None,
            spinner: SpinnerKind::Spinner,
        }
    }
}

/// Partial button configuration.
///
/// Every field is optional. Build one with the chained setters or
/// deserialize one from a camelCase mapping:
///
/// ```
/// use smart_buttons::button::{ButtonOptions, ButtonType};
///
/// let options = ButtonOptions::new().ty(ButtonType::Danger).text("Delete");
/// assert_eq!(options.text.as_deref(), Some("Delete"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOptions {
    #[serde(rename = "type")]
    pub ty: Option<ButtonType>,
    pub size: Option<ButtonSize>,
    pub shape: Option<ButtonShape>,
    pub text: Option<String>,
    pub disabled: Option<bool>,
    pub loading: Option<bool>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub icon: Option<IconSpec>,
    pub gradient: Option<GradientSpec>,
    pub effect: Option<EffectSpec>,
    #[serde(skip)]
    pub on_click: Option<Callback>,
    #[serde(skip)]
    pub on_hover: Option<Callback>,
    #[serde(skip)]
    pub on_focus: Option<Callback>,
    #[serde(skip)]
    pub on_blur: Option<Callback>,
    pub custom_class: Option<String>,
    pub custom_style: Option<IndexMap<String, String>>,
    pub ripple_color: Option<String>,
    pub shadow_color: Option<String>,
    pub shadow_intensity: Option<Intensity>,
    pub loading_text: Option<String>,
    pub spinner_type: Option<SpinnerKind>,
}

impl ButtonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ty(mut self, ty: ButtonType) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn shape(mut self, shape: ButtonShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<IconSpec>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn gradient(mut self, gradient: GradientSpec) -> Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn effect(mut self, effect: impl Into<EffectSpec>) -> Self {
        self.effect = Some(effect.into());
        self
    }

    pub fn on_click(mut self, callback: impl Fn(&mut Event) + 'static) -> Self {
        self.on_click = Some(Callback::new(callback));
        self
    }

    pub fn on_hover(mut self, callback: impl Fn(&mut Event) + 'static) -> Self {
        self.on_hover = Some(Callback::new(callback));
        self
    }

    pub fn on_focus(mut self, callback: impl Fn(&mut Event) + 'static) -> Self {
        self.on_focus = Some(Callback::new(callback));
        self
    }

    pub fn on_blur(mut self, callback: impl Fn(&mut Event) + 'static) -> Self {
        self.on_blur = Some(Callback::new(callback));
        self
    }

    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Add one inline style property to the custom style map.
    pub fn custom_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_style
            .get_or_insert_with(IndexMap::new)
            .insert(property.into(), value.into());
        self
    }

    pub fn ripple_color(mut self, color: impl Into<String>) -> Self {
        self.ripple_color = Some(color.into());
        self
    }

    pub fn shadow(mut self, color: impl Into<String>, intensity: Intensity) -> Self {
        self.shadow_color = Some(color.into());
        self.shadow_intensity = Some(intensity);
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = Some(text.into());
        self
    }

    pub fn spinner_type(mut self, spinner: SpinnerKind) -> Self {
        self.spinner_type = Some(spinner);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = ButtonConfig::default();
        assert_eq!(config.ty, ButtonType::Primary);
        assert_eq!(config.size, ButtonSize::Md);
        assert_eq!(config.shape, ButtonShape::Rounded);
        assert_eq!(config.text, "Smart Button");
        assert!(!config.disabled);
        assert!(!config.loading);
        assert_eq!(config.effect.kind, EffectKind::None);
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut config = ButtonConfig::from_options(ButtonOptions::new().text("Save").color("red"));
        let changes = config.merge(ButtonOptions::new().size(ButtonSize::Lg));

        assert_eq!(changes, ConfigChanges::SIZE);
        assert_eq!(config.text, "Save");
        assert_eq!(config.color.as_deref(), Some("red"));
        assert_eq!(config.size, ButtonSize::Lg);
    }

    #[test]
    fn test_merge_reports_changes() {
        let mut config = ButtonConfig::default();
        let changes = config.merge(
            ButtonOptions::new()
                .text("x")
                .width(120.0_f32)
                .on_click(|_| {})
                .shadow("#000000", Intensity::High),
        );
        assert_eq!(
            changes,
            ConfigChanges::TEXT | ConfigChanges::DIMENSIONS | ConfigChanges::CALLBACKS | ConfigChanges::STYLE
        );
        assert!(!changes.requires_rebuild());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: ButtonOptions = serde_json::from_value(json!({
            "type": "3d",
            "size": "xl",
            "backgroundColor": "#fff",
            "width": 120,
            "height": "2rem",
            "customStyle": { "letter-spacing": "1px" },
            "spinnerType": "dots",
        }))
        .unwrap();

        assert_eq!(options.ty, Some(ButtonType::ThreeD));
        assert_eq!(options.size, Some(ButtonSize::Xl));
        assert_eq!(options.background_color.as_deref(), Some("#fff"));
        assert_eq!(options.width, Some(Dimension::Px(120.0)));
        assert_eq!(options.height, Some(Dimension::Css("2rem".into())));
        assert_eq!(options.spinner_type, Some(SpinnerKind::Dots));
        assert_eq!(
            options.custom_style.unwrap().get("letter-spacing").map(String::as_str),
            Some("1px")
        );
    }

    #[test]
    fn test_icon_string_and_mapping() {
        let named: IconSpec = serde_json::from_value(json!("fa fa-trash")).unwrap();
        assert_eq!(named, IconSpec::new("fa fa-trash"));

        let spec: IconSpec = serde_json::from_value(json!({
            "name": "fa fa-arrow",
            "position": "right",
            "size": "2rem",
        }))
        .unwrap();
        assert_eq!(spec.position, IconPosition::Right);
        assert_eq!(spec.size.as_deref(), Some("2rem"));
        assert_eq!(spec.color, None);
    }

    #[test]
    fn test_effect_string_normalizes() {
        let effect: EffectSpec = serde_json::from_value(json!("ripple")).unwrap();
        assert_eq!(effect.kind, EffectKind::Ripple);
        assert_eq!(effect.duration_ms, Some(300));
        assert_eq!(effect.intensity, Some(Intensity::Medium));

        let none: EffectSpec = serde_json::from_value(json!("none")).unwrap();
        assert_eq!(none, EffectSpec::none());
    }

    #[test]
    fn test_effect_mapping() {
        let effect: EffectSpec = serde_json::from_value(json!({
            "type": "glow",
            "duration": 500,
            "color": "#ff0",
        }))
        .unwrap();
        assert_eq!(effect.kind, EffectKind::Glow);
        assert_eq!(effect.duration_ms, Some(500));
        assert_eq!(effect.intensity, None);
        assert_eq!(effect.color.as_deref(), Some("#ff0"));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<ButtonOptions, _> = serde_json::from_value(json!({ "type": "neon" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_gradient_direction_angles() {
        assert_eq!(GradientDirection::ToRight.angle(), "90deg");
        assert_eq!(GradientDirection::ToTopLeft.angle(), "315deg");
        assert_eq!(GradientDirection::ToBottomLeft.angle(), "225deg");
    }

    #[test]
    fn test_icon_position_groups() {
        assert!(IconPosition::Left.is_leading());
        assert!(IconPosition::Top.is_leading());
        assert!(!IconPosition::Bottom.is_leading());
        assert!(IconPosition::Bottom.is_stacked());
        assert!(!IconPosition::Right.is_stacked());
    }
}
