use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use showcase_core::content;

use crate::app::App;
use crate::page::{feature_columns, SectionId};

use super::{render_clipped, stagger_alpha};

const STAGGER_MS: u64 = 100;
const DURATION_MS: u64 = 600;

/// Feature card grid, cards fading in staggered when scrolled into view
pub struct FeaturesWidget;

impl FeaturesWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App, now: Instant) {
        let theme = &app.theme;
        let phase = app.reveal_phase(SectionId::Features);
        let cards = content::feature_cards();

        let cols = feature_columns(app.layout.width) as usize;
        let cell_width = (app.layout.width as usize / cols).saturating_sub(2).max(16);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            "   Why Simple?",
            Style::default()
                .fg(theme.fg0)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for (row_index, row) in cards.chunks(cols).enumerate() {
            // Each card occupies five rows in its column
            let mut cells: Vec<Vec<Span>> = vec![Vec::new(); 5];
            for (col_index, card) in row.iter().enumerate() {
                let index = row_index * cols + col_index;
                let alpha = stagger_alpha(phase, now, index, STAGGER_MS, DURATION_MS);

                let title_style = Style::default()
                    .fg(theme.fade(theme.accent, alpha))
                    .add_modifier(Modifier::BOLD);
                let body_style = Style::default().fg(theme.fade(theme.grey2, alpha));

                let mut rows = vec![
                    Span::styled(pad(format!("▪ {}", card.title), cell_width), title_style),
                ];
                let wrapped = wrap(card.blurb, cell_width.saturating_sub(2));
                for chunk in wrapped.iter().take(3) {
                    rows.push(Span::styled(
                        pad(format!("  {}", chunk), cell_width),
                        body_style,
                    ));
                }
                while rows.len() < 5 {
                    rows.push(Span::raw(" ".repeat(cell_width)));
                }

                for (i, span) in rows.into_iter().enumerate() {
                    cells[i].push(Span::raw("  "));
                    cells[i].push(span);
                }
            }
            for spans in cells {
                lines.push(Line::from(spans));
            }
        }

        render_clipped(frame, area, clip_top, lines);
    }
}

fn pad(mut text: String, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        text.push_str(&" ".repeat(width - len));
    }
    text
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            result.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        result.push(line);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let wrapped = wrap("one design language for every framework", 12);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(wrapped.join(" "), "one design language for every framework");
    }

    #[test]
    fn test_wrap_zero_width_degrades() {
        assert_eq!(wrap("text", 0), vec!["text".to_string()]);
    }

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("ab".to_string(), 4), "ab  ");
        assert_eq!(pad("abcd".to_string(), 2), "abcd");
    }
}
