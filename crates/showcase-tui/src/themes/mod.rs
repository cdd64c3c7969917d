//! Theme palettes and loader.
//!
//! Two built-in palettes (light and dark) matching the design-system
//! brand, with per-color hex overrides from configuration.

mod dark;
mod light;

use ratatui::style::Color;
use showcase_core::config::ThemeColorOverrides;
use showcase_core::Appearance;

use crate::theme::Theme;

pub use dark::dark;
pub use light::light;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Pick the palette for the resolved appearance and apply overrides
pub fn resolve_theme(appearance: Appearance, overrides: &ThemeColorOverrides) -> Theme {
    let base = match appearance {
        Appearance::Light => light(),
        Appearance::Dark => dark(),
    };
    apply_overrides(base, overrides)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    if let Some(color) = overrides.bg0.as_deref().and_then(parse_hex_color) {
        theme.bg0 = color;
    }
    if let Some(color) = overrides.bg1.as_deref().and_then(parse_hex_color) {
        theme.bg1 = color;
    }
    if let Some(color) = overrides.bg2.as_deref().and_then(parse_hex_color) {
        theme.bg2 = color;
    }
    if let Some(color) = overrides.fg0.as_deref().and_then(parse_hex_color) {
        theme.fg0 = color;
    }
    if let Some(color) = overrides.fg1.as_deref().and_then(parse_hex_color) {
        theme.fg1 = color;
    }
    if let Some(color) = overrides.accent.as_deref().and_then(parse_hex_color) {
        theme.accent = color;
    }
    if let Some(color) = overrides.brand.as_deref().and_then(parse_hex_color) {
        theme.brand = color;
    }
    if let Some(color) = overrides.error.as_deref().and_then(parse_hex_color) {
        theme.error = color;
    }
    if let Some(color) = overrides.success.as_deref().and_then(parse_hex_color) {
        theme.success = color;
    }

    theme
}
