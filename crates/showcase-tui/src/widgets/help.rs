use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use showcase_core::config::KeymapConfig;

use crate::app::App;

use super::centered_rect;

/// Help overlay listing the active key bindings
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();
        let keymap = &app.config.keymap;

        let entries = Self::entries(keymap);
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.bg3))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = Vec::new();
        for (key, what) in entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {:>9}  ", key),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(what, Style::default().fg(theme.fg1)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " any key to close ",
            Style::default().fg(theme.grey1),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn entries(keymap: &KeymapConfig) -> Vec<(String, &'static str)> {
        vec![
            (format!("{}/{}", keymap.scroll_down, keymap.scroll_up), "scroll"),
            (keymap.jump_to_top.clone(), "top"),
            (keymap.jump_to_bottom.clone(), "bottom"),
            ("1-3".to_string(), "select code tab"),
            (keymap.next_tab.clone(), "next code tab"),
            (keymap.toggle_theme.clone(), "toggle theme"),
            (keymap.copy_code.clone(), "copy code sample"),
            (keymap.copy_install.clone(), "copy install command"),
            (keymap.nav_overlay.clone(), "section menu"),
            (keymap.open_docs.clone(), "open documentation"),
            (keymap.quit.clone(), "quit"),
        ]
    }
}
