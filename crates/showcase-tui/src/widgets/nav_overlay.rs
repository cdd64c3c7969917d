use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::page::SectionId;

use super::centered_rect;

/// Full-screen section navigation overlay
pub struct NavOverlayWidget;

impl NavOverlayWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let popup_width = 36u16.min(area.width.saturating_sub(4));
        let popup_height = (SectionId::ALL.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Sections ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = Vec::new();
        for (index, id) in SectionId::ALL.iter().enumerate() {
            let selected = index == app.nav_selected;
            let style = if selected {
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1)
            };
            let marker = if selected { "▸ " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{}{}", marker, id.title()),
                style,
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "j/k move · Enter go · Esc close",
            Style::default().fg(theme.grey1),
        )));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
