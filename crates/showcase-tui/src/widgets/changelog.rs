use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use showcase_core::content;

use crate::app::App;
use crate::page::SectionId;

use super::{render_clipped, stagger_alpha};

const STAGGER_MS: u64 = 200;
const DURATION_MS: u64 = 600;

/// Changelog section, entries fading in one after another
pub struct ChangelogWidget;

impl ChangelogWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App, now: Instant) {
        let theme = &app.theme;
        let phase = app.reveal_phase(SectionId::Changelog);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            "   Changelog",
            Style::default()
                .fg(theme.fg0)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for (index, entry) in content::changelog().iter().enumerate() {
            let alpha = stagger_alpha(phase, now, index, STAGGER_MS, DURATION_MS);

            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    format!("v{}", entry.version),
                    Style::default()
                        .fg(theme.fade(theme.accent, alpha))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", entry.date.format("%b %d, %Y")),
                    Style::default().fg(theme.fade(theme.grey1, alpha)),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    entry.notes,
                    Style::default().fg(theme.fade(theme.grey2, alpha)),
                ),
            ]));
            lines.push(Line::default());
        }

        render_clipped(frame, area, clip_top, lines);
    }
}
