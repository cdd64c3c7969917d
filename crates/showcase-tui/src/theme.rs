use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    /// Page background
    pub bg0: Color,
    /// Raised surface (cards, code window)
    pub bg1: Color,
    /// Highlight surface (active tab, selection)
    pub bg2: Color,
    /// Borders and rules
    pub bg3: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Semantic colors
    /// Links, CTA, focus
    pub accent: Color,
    /// Brand green (copy confirmation, badge)
    pub brand: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl Theme {
    /// Blend a foreground color toward the page background by `alpha`
    /// (1.0 = full color, 0.0 = invisible). Drives every fade animation.
    pub fn fade(&self, color: Color, alpha: f64) -> Color {
        blend(self.bg0, color, alpha)
    }
}

/// Channel-wise blend from `a` to `b`; non-RGB colors snap at the midpoint
pub fn blend(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(ar, br, t),
            mix(ag, bg, t),
            mix(ab, bb, t),
        ),
        _ => {
            if t < 0.5 {
                a
            } else {
                b
            }
        }
    }
}

#[inline]
fn mix(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = crate::themes::dark();
        assert_eq!(theme.fade(theme.fg0, 0.0), theme.bg0);
        assert_eq!(theme.fade(theme.fg0, 1.0), theme.fg0);
    }

    #[test]
    fn test_blend_midpoint() {
        let mixed = blend(Color::Rgb(0, 0, 0), Color::Rgb(100, 200, 50), 0.5);
        assert_eq!(mixed, Color::Rgb(50, 100, 25));
    }

    #[test]
    fn test_blend_non_rgb_snaps() {
        assert_eq!(blend(Color::Reset, Color::Blue, 0.2), Color::Reset);
        assert_eq!(blend(Color::Reset, Color::Blue, 0.8), Color::Blue);
    }
}
