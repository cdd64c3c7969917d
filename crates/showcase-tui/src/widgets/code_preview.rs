use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::app::App;
use crate::page::SectionId;

use super::{render_clipped, stagger_alpha};

const WINDOW_FADE_MS: u64 = 800;

/// Tabbed code preview window.
///
/// In pinned mode the window renders fixed while the page scrolls through
/// the scene, with scroll progress choosing the tab; otherwise it is an
/// ordinary section and tabs change only on direct selection. The body
/// cross-fades between panels on every switch.
pub struct CodePreviewWidget;

impl CodePreviewWidget {
    pub fn render(frame: &mut Frame, area: Rect, clip_top: u16, app: &App, now: Instant) {
        let theme = &app.theme;
        let Some(view) = app.tabs.display(now) else {
            // No panels defined: the preview is inert
            return;
        };

        let phase = app.reveal_phase(SectionId::CodePreview);
        let window_alpha = stagger_alpha(phase, now, 0, 0, WINDOW_FADE_MS);
        let body_alpha = window_alpha * view.alpha;

        let inner_width = area.width.saturating_sub(6) as usize;

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::default());

        // Tab row; the highlight moves as soon as a switch starts
        let mut tab_spans: Vec<Span> = vec![Span::raw("   ")];
        for (index, panel) in app.tabs.panels().iter().enumerate() {
            let style = if index == view.active_index {
                Style::default()
                    .fg(theme.fade(theme.fg0, window_alpha))
                    .bg(theme.fade(theme.bg2, window_alpha))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fade(theme.grey1, window_alpha))
            };
            tab_spans.push(Span::styled(format!(" {} ", panel.label), style));
            tab_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(tab_spans));

        // Window title bar shows the displayed panel's filename
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!("── {} ", view.panel.filename),
                Style::default().fg(theme.fade(theme.grey1, window_alpha)),
            ),
            Span::styled(
                "─".repeat(inner_width.saturating_sub(view.panel.filename.len() + 4)),
                Style::default().fg(theme.fade(theme.bg3, window_alpha)),
            ),
        ]));

        // Body cross-fades between panels
        let body_style = Style::default()
            .fg(theme.fade(theme.fg1, body_alpha))
            .bg(theme.fade(theme.bg1, window_alpha));
        for source_line in view.panel.source.lines() {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(
                    format!("{:<width$}", source_line, width = inner_width),
                    body_style,
                ),
            ]));
        }

        // Hint row with copy feedback and, when pinned, scene progress
        let copy_hint = if app.copy_code.active(now) {
            Span::styled(
                "   Copied!",
                Style::default().fg(theme.fade(theme.brand, window_alpha)),
            )
        } else {
            Span::styled(
                "   [c] copy  [Tab] switch",
                Style::default().fg(theme.fade(theme.grey1, window_alpha)),
            )
        };
        let mut hint_spans = vec![copy_hint];
        if app.code_preview_pinned() {
            let mut dots = String::from("   ");
            for index in 0..app.tabs.len() {
                dots.push(if index == view.active_index { '●' } else { '○' });
                dots.push(' ');
            }
            hint_spans.push(Span::styled(
                dots,
                Style::default().fg(theme.fade(theme.accent, window_alpha)),
            ));
        }
        lines.push(Line::from(hint_spans));

        render_clipped(frame, area, clip_top, lines);
    }
}
