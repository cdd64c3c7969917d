use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Fixed page header: brand mark, section links, theme hint. Renders an
/// accent rule once the page is scrolled (elevation).
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let brand = " ◆ Simple Design System";
        let links = "Features  Code  Changelog   [t] theme  [m] menu ";
        let padding = area
            .width
            .saturating_sub(brand.width() as u16 + links.width() as u16) as usize;

        let top = Line::from(vec![
            Span::styled(
                brand,
                Style::default()
                    .fg(theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(links, Style::default().fg(theme.grey2)),
        ]);

        let rule_color = if app.header_elevated {
            theme.accent
        } else {
            theme.bg3
        };
        let rule = Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(rule_color),
        ));

        let lines = vec![Line::default(), top, rule];
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme.bg0)),
            area,
        );
    }
}
