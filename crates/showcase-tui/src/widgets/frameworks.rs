use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use showcase_core::content;

use crate::app::App;
use crate::page::SectionId;

use super::{render_clipped, stagger_alpha};

const STAGGER_MS: u64 = 100;
const DURATION_MS: u64 = 500;

/// Framework compatibility band
pub struct FrameworksWidget;

impl FrameworksWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App, now: Instant) {
        let theme = &app.theme;
        let phase = app.reveal_phase(SectionId::Frameworks);

        let mut spans: Vec<Span> = vec![Span::raw("   ")];
        for (index, name) in content::frameworks().iter().enumerate() {
            let alpha = stagger_alpha(phase, now, index, STAGGER_MS, DURATION_MS);
            if index > 0 {
                spans.push(Span::styled(
                    "  ·  ",
                    Style::default().fg(theme.fade(theme.grey0, alpha)),
                ));
            }
            spans.push(Span::styled(
                *name,
                Style::default().fg(theme.fade(theme.fg1, alpha)),
            ));
        }

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "   Works with your stack",
                Style::default()
                    .fg(theme.fg0)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(spans),
        ];

        render_clipped(frame, area, clip_top, lines);
    }
}
