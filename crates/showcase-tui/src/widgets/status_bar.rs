use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use showcase_core::Appearance;

use crate::app::{App, Mode};

use super::truncate_str;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "PAGE",
            Mode::NavOverlay => "MENU",
            Mode::Help => "HELP",
        };
        let theme_str = match app.appearance {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        };

        let max = app.layout.max_scroll();
        let percent = if max == 0 {
            100
        } else {
            (app.page.current() as u32 * 100 / max as u32).min(100)
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", truncate_str(msg, area.width as usize / 2))
        } else {
            format!(" {} | {} | {}%", mode_str, theme_str, percent)
        };

        let help_hint = " j/k:scroll 1-3:tabs t:theme m:menu ?:help q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
