use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use showcase_core::content;

use crate::app::App;

use super::render_clipped;

/// Hero section: badge, title, subtitle, call-to-action, install line and
/// a small component preview, entering on the startup timeline.
pub struct HeroWidget;

impl HeroWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App, now: Instant) {
        let theme = &app.theme;

        let badge_a = app.hero_value("badge", now);
        let title_a = app.hero_value("title", now);
        let subtitle_a = app.hero_value("subtitle", now);
        let cta_a = app.hero_value("cta", now);
        let install_a = app.hero_value("install", now);
        let preview_a = app.hero_value("preview", now);

        // Background drift accents, looping forever
        let blob0 = app.blob_offset(0, now).round().max(0.0) as usize;
        let blob1 = (app.blob_offset(1, now).round() + 4.0).max(0.0) as usize;

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(6 + blob0)),
            Span::styled("∙∙∙∙∙∙∙∙", Style::default().fg(theme.fade(theme.accent, 0.35))),
        ]));

        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                "● v2.4 — now with web components",
                Style::default().fg(theme.fade(theme.brand, badge_a)),
            ),
        ]));
        lines.push(Line::default());

        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                "Simple Design System",
                Style::default()
                    .fg(theme.fade(theme.fg0, title_a))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                "Beautiful components for every framework",
                Style::default().fg(theme.fade(theme.fg1, title_a)),
            ),
        ]));
        lines.push(Line::default());

        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                "One design language for React, vanilla HTML and web components,",
                Style::default().fg(theme.fade(theme.grey2, subtitle_a)),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                "themeable down to the last token.",
                Style::default().fg(theme.fade(theme.grey2, subtitle_a)),
            ),
        ]));
        lines.push(Line::default());

        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                "▐ Get Started ▌",
                Style::default()
                    .fg(theme.fade(theme.bg0, cta_a))
                    .bg(theme.fade(theme.accent, cta_a))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                "▐ View on GitHub ▌",
                Style::default().fg(theme.fade(theme.fg0, cta_a)).bg(theme.fade(theme.bg2, cta_a)),
            ),
        ]));
        lines.push(Line::default());

        let install_label = if app.copy_install.active(now) {
            Span::styled(
                "  Copied!",
                Style::default().fg(theme.fade(theme.brand, install_a)),
            )
        } else {
            Span::styled(
                "  [y] copy",
                Style::default().fg(theme.fade(theme.grey1, install_a)),
            )
        };
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!("$ {}", content::INSTALL_COMMAND),
                Style::default()
                    .fg(theme.fade(theme.fg1, install_a))
                    .bg(theme.fade(theme.bg1, install_a)),
            ),
            install_label,
        ]));
        lines.push(Line::default());

        // Component preview slides in from the right
        let slide = ((1.0 - preview_a) * 8.0).round() as usize;
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(5 + slide)),
            Span::styled(
                "▐ Primary ▌",
                Style::default()
                    .fg(theme.fade(theme.bg0, preview_a))
                    .bg(theme.fade(theme.accent, preview_a)),
            ),
            Span::raw(" "),
            Span::styled(
                "▐ Secondary ▌",
                Style::default()
                    .fg(theme.fade(theme.fg0, preview_a))
                    .bg(theme.fade(theme.bg2, preview_a)),
            ),
            Span::raw(" "),
            Span::styled(
                "▐ Outline ▌",
                Style::default().fg(theme.fade(theme.accent, preview_a)),
            ),
            Span::raw(" "),
            Span::styled(
                "▐ Ghost ▌",
                Style::default().fg(theme.fade(theme.grey2, preview_a)),
            ),
        ]));

        lines.push(Line::from(vec![
            Span::raw(" ".repeat(10 + blob1)),
            Span::styled(
                "∙∙∙∙∙∙",
                Style::default().fg(theme.fade(theme.brand, 0.3)),
            ),
        ]));

        // Fill the remaining hero rows so the section keeps its height
        let wanted = usize::from(area.height) + usize::from(clip_top);
        while lines.len() < wanted {
            lines.push(Line::default());
        }

        render_clipped(frame, area, clip_top, lines);
    }
}
