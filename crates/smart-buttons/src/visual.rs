//! Visual builder: turns configuration values into classes, inline style
//! values and small decorative nodes.
//!
//! Nothing here keeps state. The widgets call these helpers while building
//! and patching their nodes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use smart_buttons_core::profiling::profile_function;
use smart_buttons_dom::{Document, NodeId, Vec2};

use crate::button::{
    ButtonConfig, Dimension, EffectKind, EffectSpec, GradientSpec, IconSpec, Intensity, SpinnerKind,
};

/// Root class of every button.
pub const BUTTON_CLASS: &str = "smart-button";

/// Color used by ripple and wave feedback when none is configured.
pub const DEFAULT_FEEDBACK_COLOR: &str = "rgba(255, 255, 255, 0.3)";

/// How long ripple and wave nodes stay mounted.
pub const FEEDBACK_LIFETIME: Duration = Duration::from_millis(600);

pub const DEFAULT_ICON_SIZE: &str = "1rem";
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique widget id of the form `sb_xxxxxxxxx`.
pub fn generate_id() -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("sb_{:09x}", id)
}

/// Join the present, non-empty class names with single spaces.
pub fn merge_classes<'a, I>(classes: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    classes
        .into_iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Modifier class for one axis, e.g. `smart-button--danger`.
pub fn modifier_class(modifier: &str) -> String {
    format!("{}--{}", BUTTON_CLASS, modifier)
}

/// Full class attribute for a button configuration.
pub fn button_class_name(config: &ButtonConfig) -> String {
    let ty = modifier_class(config.ty.as_str());
    let size = modifier_class(config.size.as_str());
    let shape = modifier_class(config.shape.as_str());
    let effect = (!config.effect.kind.is_none()).then(|| modifier_class(config.effect.kind.as_str()));
    let loading = config.loading.then(|| modifier_class("loading"));

    merge_classes([
        Some(BUTTON_CLASS),
        Some(ty.as_str()),
        Some(size.as_str()),
        Some(shape.as_str()),
        effect.as_deref(),
        loading.as_deref(),
        config.custom_class.as_deref(),
    ])
}

/// `linear-gradient(...)` value. A non-zero explicit angle wins over the
/// direction.
pub fn gradient_css(gradient: &GradientSpec) -> String {
    let angle = match gradient.angle {
        Some(angle) if angle != 0.0 => format!("{}deg", angle),
        _ => gradient.direction.angle().to_string(),
    };
    format!("linear-gradient({}, {})", angle, gradient.colors.join(", "))
}

/// `box-shadow` value with a translucent (`20` alpha) color.
pub fn shadow_css(color: Option<&str>, intensity: Intensity) -> String {
    let offsets = match intensity {
        Intensity::Low => "0 2px 4px",
        Intensity::Medium => "0 4px 8px",
        Intensity::High => "0 8px 16px",
    };
    format!("{} {}20", offsets, color.unwrap_or("#000"))
}

pub fn glow_css(color: &str, size: Option<&str>) -> String {
    format!("0 0 {} {}", size.unwrap_or("10px"), color)
}

/// `transition` value covering each property.
pub fn transition_css(properties: &[&str], duration_ms: u32, easing: &str) -> String {
    let properties: &[&str] = if properties.is_empty() { &["all"] } else { properties };
    properties
        .iter()
        .map(|property| format!("{} {}ms {}", property, duration_ms, easing))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn dimension_css(dimension: &Dimension) -> String {
    match dimension {
        Dimension::Px(px) => format!("{}px", px),
        Dimension::Css(css) => css.clone(),
    }
}

/// Convert a camelCase style key (`backgroundColor`) to its CSS property
/// name (`background-color`). Custom properties and kebab-case pass through.
pub fn css_property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }
    let mut name = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Apply the inline style overrides of a button configuration.
///
/// The free-form map goes first so the typed fields win over it.
pub fn apply_inline_styles(doc: &Document, node: NodeId, config: &ButtonConfig) {
    if let Some(custom) = &config.custom_style {
        for (key, value) in custom {
            doc.set_style(node, &css_property_name(key), value);
        }
    }
    if let Some(gradient) = &config.gradient {
        doc.set_style(node, "background", &gradient_css(gradient));
    }
    if let Some(color) = &config.color {
        doc.set_style(node, "color", color);
    }
    if let Some(color) = &config.background_color {
        doc.set_style(node, "background-color", color);
    }
    if let Some(color) = &config.border_color {
        doc.set_style(node, "border-color", color);
    }
    if let Some(width) = &config.width {
        doc.set_style(node, "width", &dimension_css(width));
    }
    if let Some(height) = &config.height {
        doc.set_style(node, "height", &dimension_css(height));
    }
    if let Some(color) = &config.shadow_color {
        doc.set_style(node, "box-shadow", &shadow_css(Some(color), config.shadow_intensity));
    }
}

/// `<i class="smart-button__icon {name}">` with the configured size and color.
pub fn create_icon(doc: &Document, icon: &IconSpec) -> NodeId {
    let node = doc.create_element("i");
    doc.set_class_name(node, &format!("smart-button__icon {}", icon.name));
    doc.set_style(node, "font-size", icon.size.as_deref().unwrap_or(DEFAULT_ICON_SIZE));
    if let Some(color) = &icon.color {
        doc.set_style(node, "color", color);
    }
    node
}

pub fn create_spinner(doc: &Document, kind: SpinnerKind) -> NodeId {
    let spinner = doc.create_element("div");
    doc.set_class_name(
        spinner,
        &format!("smart-button__spinner smart-button__spinner--{}", kind.as_str()),
    );
    for _ in 0..kind.segments() {
        let segment = doc.create_element("span");
        doc.append_child(spinner, segment);
    }
    spinner
}

pub fn create_loading_text(doc: &Document, text: Option<&str>) -> NodeId {
    let label = doc.create_element("span");
    doc.set_class_name(label, "smart-button__loading-text");
    doc.set_text_content(label, text.unwrap_or(DEFAULT_LOADING_TEXT));
    label
}

/// Add the effect class, duration and color. No-op for `none`.
///
/// Pulse also starts its animation and glow publishes its shadow as
/// `--effect-glow` for the hover rule.
pub fn apply_effect(doc: &Document, node: NodeId, effect: &EffectSpec) {
    if effect.kind.is_none() {
        return;
    }
    doc.add_class(node, &modifier_class(effect.kind.as_str()));
    if let Some(duration) = effect.duration_ms.filter(|&ms| ms > 0) {
        doc.set_style(node, "transition-duration", &format!("{}ms", duration));
    }
    if let Some(color) = &effect.color {
        doc.set_style(node, "--effect-color", color);
    }
    match effect.kind {
        EffectKind::Pulse => apply_pulse(doc, node, effect.color.as_deref()),
        EffectKind::Glow => {
            let size = match effect.intensity.unwrap_or_default() {
                Intensity::Low => "5px",
                Intensity::Medium => "10px",
                Intensity::High => "20px",
            };
            let glow = glow_css(effect.color.as_deref().unwrap_or("currentColor"), Some(size));
            doc.set_style(node, "--effect-glow", &glow);
        }
        _ => {}
    }
}

pub fn remove_effect(doc: &Document, node: NodeId, effect: &EffectSpec) {
    if effect.kind.is_none() {
        return;
    }
    doc.remove_class(node, &modifier_class(effect.kind.as_str()));
    for property in ["transition-duration", "--effect-color", "--effect-glow"] {
        doc.remove_style(node, property);
    }
    if effect.kind == EffectKind::Pulse {
        remove_pulse(doc, node);
    }
}

pub fn apply_pulse(doc: &Document, node: NodeId, color: Option<&str>) {
    doc.set_style(node, "animation", "pulse 1s ease-in-out infinite");
    doc.set_style(node, "--pulse-color", color.unwrap_or("currentColor"));
}

pub fn remove_pulse(doc: &Document, node: NodeId) {
    doc.remove_style(node, "animation");
    doc.remove_style(node, "--pulse-color");
}

/// Mount a ripple under `node`, centred on `pointer` (client coordinates).
///
/// The ripple is a square as large as the node's longest side and removes
/// itself after [`FEEDBACK_LIFETIME`].
pub fn create_ripple(doc: &Document, node: NodeId, pointer: Vec2, color: Option<&str>) -> NodeId {
    profile_function!();
    let rect = doc.bounding_rect(node);
    let size = rect.max_extent();
    let local = rect.to_local(pointer);
    let x = local.x - size / 2.0;
    let y = local.y - size / 2.0;

    let ripple = doc.create_element("span");
    doc.set_class_name(ripple, "smart-button__ripple");
    for (property, value) in [
        ("position", "absolute".to_string()),
        ("width", format!("{}px", size)),
        ("height", format!("{}px", size)),
        ("left", format!("{}px", x)),
        ("top", format!("{}px", y)),
        ("background", color.unwrap_or(DEFAULT_FEEDBACK_COLOR).to_string()),
        ("border-radius", "50%".to_string()),
        ("transform", "scale(0)".to_string()),
        ("animation", "ripple 0.6s linear".to_string()),
        ("pointer-events", "none".to_string()),
    ] {
        doc.set_style(ripple, property, &value);
    }
    doc.append_child(node, ripple);
    schedule_removal(doc, ripple);
    ripple
}

/// Mount a radial wave centred in `node`. Removes itself like a ripple.
pub fn create_wave(doc: &Document, node: NodeId, color: Option<&str>) -> NodeId {
    let size = doc.bounding_rect(node).max_extent();

    let wave = doc.create_element("div");
    doc.set_class_name(wave, "smart-button__wave");
    for (property, value) in [
        ("position", "absolute".to_string()),
        ("width", format!("{}px", size)),
        ("height", format!("{}px", size)),
        ("left", "50%".to_string()),
        ("top", "50%".to_string()),
        ("transform", "translate(-50%, -50%)".to_string()),
        (
            "background",
            format!(
                "radial-gradient(circle, {} 0%, transparent 70%)",
                color.unwrap_or(DEFAULT_FEEDBACK_COLOR)
            ),
        ),
        ("border-radius", "50%".to_string()),
        ("animation", "wave 0.6s ease-out".to_string()),
        ("pointer-events", "none".to_string()),
    ] {
        doc.set_style(wave, property, &value);
    }
    doc.append_child(node, wave);
    schedule_removal(doc, wave);
    wave
}

// The node may already be gone when the timer fires.
fn schedule_removal(doc: &Document, node: NodeId) {
    doc.set_timeout(FEEDBACK_LIFETIME, move |doc| {
        if doc.parent(node).is_some() {
            doc.release(node);
        }
    });
}
