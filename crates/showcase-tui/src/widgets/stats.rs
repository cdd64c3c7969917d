use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::app::App;
use crate::page::SectionId;

use super::{render_clipped, stagger_alpha};

const STAGGER_MS: u64 = 150;
const DURATION_MS: u64 = 600;

/// Stats band: values count up from zero once scrolled into view
pub struct StatsWidget;

impl StatsWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App, now: Instant) {
        let theme = &app.theme;
        let phase = app.reveal_phase(SectionId::Stats);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "   By the numbers",
            Style::default()
                .fg(theme.fg0)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        let mut values: Vec<Span> = Vec::new();
        let mut labels: Vec<Span> = Vec::new();
        for (index, counter) in app.stat_counters.iter().enumerate() {
            let alpha = stagger_alpha(phase, now, index, STAGGER_MS, DURATION_MS);
            let text = format!("{}{}", counter.value(now), counter.suffix);
            let cell = 16usize;

            values.push(Span::raw("   "));
            values.push(Span::styled(
                format!("{:<width$}", text, width = cell),
                Style::default()
                    .fg(theme.fade(theme.brand, alpha))
                    .add_modifier(Modifier::BOLD),
            ));
            labels.push(Span::raw("   "));
            labels.push(Span::styled(
                format!("{:<width$}", counter.label, width = cell),
                Style::default().fg(theme.fade(theme.grey2, alpha)),
            ));
        }
        lines.push(Line::from(values));
        lines.push(Line::from(labels));
        lines.push(Line::default());

        render_clipped(frame, area, clip_top, lines);
    }
}
