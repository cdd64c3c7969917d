//! Section renderers for the showcase page.
//!
//! Every page section builds its content as a list of lines and renders
//! through `render_clipped`, which drops the rows scrolled off above the
//! viewport. Overlays (navigation, help) render centered popups on top.

mod changelog;
mod code_preview;
mod features;
mod frameworks;
mod header;
mod help;
mod hero;
mod nav_overlay;
mod stats;
mod status_bar;

pub use changelog::ChangelogWidget;
pub use code_preview::CodePreviewWidget;
pub use features::FeaturesWidget;
pub use frameworks::FrameworksWidget;
pub use header::HeaderWidget;
pub use help::HelpWidget;
pub use hero::HeroWidget;
pub use nav_overlay::NavOverlayWidget;
pub use stats::StatsWidget;
pub use status_bar::StatusBarWidget;

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::RevealPhase;
use crate::motion::easing::EasingTypeExt;
use showcase_core::EasingType;

/// Render section lines into `area`, dropping `clip_top` rows scrolled
/// off above the viewport
pub(crate) fn render_clipped(frame: &mut Frame, area: Rect, clip_top: u16, lines: Vec<Line>) {
    let visible: Vec<Line> = lines.into_iter().skip(clip_top as usize).collect();
    frame.render_widget(Paragraph::new(visible), area);
}

/// Entrance alpha of the `index`-th item of a revealed section: items
/// fade in over `duration_ms`, each starting `stagger_ms` after the one
/// before it.
pub(crate) fn stagger_alpha(
    phase: RevealPhase,
    now: Instant,
    index: usize,
    stagger_ms: u64,
    duration_ms: u64,
) -> f64 {
    match phase {
        RevealPhase::Hidden => 0.0,
        RevealPhase::Shown => 1.0,
        RevealPhase::Entering(started) => {
            let elapsed = now.saturating_duration_since(started).as_millis() as f64;
            let offset = (index as u64 * stagger_ms) as f64;
            let t = ((elapsed - offset) / duration_ms.max(1) as f64).clamp(0.0, 1.0);
            EasingType::Cubic.apply(t)
        }
    }
}

/// Helper to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(
        x,
        y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Truncate a string to max length with ellipsis
pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stagger_alpha_phases() {
        let now = Instant::now();
        assert_eq!(stagger_alpha(RevealPhase::Hidden, now, 0, 100, 600), 0.0);
        assert_eq!(stagger_alpha(RevealPhase::Shown, now, 5, 100, 600), 1.0);
    }

    #[test]
    fn test_stagger_delays_later_items() {
        let started = Instant::now();
        let now = started + Duration::from_millis(300);
        let phase = RevealPhase::Entering(started);

        let first = stagger_alpha(phase, now, 0, 150, 600);
        let third = stagger_alpha(phase, now, 2, 150, 600);
        assert!(first > third, "{first} <= {third}");
        // The third item has not started yet at 300ms
        assert_eq!(third, 0.0);
    }

    #[test]
    fn test_stagger_completes_for_all_items() {
        let started = Instant::now();
        let now = started + Duration::from_millis(5000);
        let phase = RevealPhase::Entering(started);
        for index in 0..6 {
            assert!((stagger_alpha(phase, now, index, 200, 600) - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer string", 10), "a longe...");
    }
}
