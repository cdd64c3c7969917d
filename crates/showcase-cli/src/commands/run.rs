use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use tracing::warn;

use showcase_core::{content, Appearance, AppConfig, PrefStore};
use showcase_tui::{
    app::{App, Mode},
    clipboard::{ClipboardWrite, Osc52Clipboard},
    cursor::CursorFollower,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    page::{SectionId, HEADER_ROWS},
    widgets::{
        ChangelogWidget, CodePreviewWidget, FeaturesWidget, FrameworksWidget, HeaderWidget,
        HelpWidget, HeroWidget, NavOverlayWidget, StatsWidget, StatusBarWidget,
    },
};

pub fn run(config: AppConfig, theme_override: Option<Appearance>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Open the durable preference store
    let prefs = PrefStore::open(config.prefs_path());
    let system_appearance = detect_system_appearance();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        SetTitle("Simple Design System")
    )?;

    // Mouse support is optional: without it the cursor trail is inert
    let mouse_captured = execute!(io::stdout(), EnableMouseCapture).is_ok();
    if !mouse_captured {
        warn!("Mouse capture unavailable, cursor trail disabled");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (width, height) = crossterm::terminal::size()?;
    let mut app = App::new(
        config,
        prefs,
        system_appearance,
        width,
        height,
        Instant::now(),
    );
    if let Some(appearance) = theme_override {
        app.set_appearance(appearance);
    }
    if !mouse_captured {
        app.cursor = CursorFollower::new(false);
    }

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        app.config.ui.tick_rate_ms,
        app.config.motion.animation_fps,
    );

    let mut clipboard = Osc52Clipboard::new();

    // Track if we need high frame rate for running animations.
    // Checked at the END of each iteration for the NEXT iteration's rate.
    let mut needs_fast_update = true;

    // Main loop
    loop {
        let now = Instant::now();
        app.on_tick(now);

        terminal.draw(|frame| draw(frame, &app, now))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action, &mut clipboard);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    handle_action(&mut app, action, &mut clipboard);
                }
                AppEvent::Resize(w, h) => app.on_resize(w, h),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if mouse_captured {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Apply an input action to the application state
fn handle_action(app: &mut App, action: Action, clipboard: &mut dyn ClipboardWrite) {
    let now = Instant::now();

    // 'gg' sequences span two key presses
    if action == Action::PendingG {
        app.pending_key = Some('g');
        return;
    }
    app.clear_pending_key();

    // Wheel scrolling is ignored while an overlay is open
    let scrolling = matches!(
        action,
        Action::ScrollDown
            | Action::ScrollUp
            | Action::ScrollHalfPageDown
            | Action::ScrollHalfPageUp
            | Action::ScrollPageDown
            | Action::ScrollPageUp
            | Action::JumpToTop
            | Action::JumpToBottom
    );
    if scrolling && app.mode != Mode::Normal {
        return;
    }

    match action {
        Action::Quit => app.should_quit = true,

        Action::ScrollDown => app.scroll_down(1),
        Action::ScrollUp => app.scroll_up(1),
        Action::ScrollHalfPageDown => {
            let lines = app.half_page();
            app.scroll_down(lines);
        }
        Action::ScrollHalfPageUp => {
            let lines = app.half_page();
            app.scroll_up(lines);
        }
        Action::ScrollPageDown => {
            let lines = app.full_page();
            app.scroll_down(lines);
        }
        Action::ScrollPageUp => {
            let lines = app.full_page();
            app.scroll_up(lines);
        }
        Action::JumpToTop => app.jump_to_top(now),
        Action::JumpToBottom => app.jump_to_bottom(now),

        Action::NextTab => app.tabs.select_next(now),
        Action::PrevTab => app.tabs.select_prev(now),
        Action::SelectTab(index) => app.tabs.select_index(index, now),

        Action::ToggleTheme => app.toggle_theme(),
        Action::CopyCode => app.copy_active_panel(clipboard, now),
        Action::CopyInstall => app.copy_install_command(clipboard, now),

        Action::OpenNav => app.open_nav(),
        Action::MoveDown => app.nav_move(1),
        Action::MoveUp => app.nav_move(-1),
        Action::Select => app.nav_select(now),
        Action::ExitMode => app.exit_mode(),

        Action::OpenDocs => {
            if let Err(e) = open::that(content::DOCS_URL) {
                warn!("Failed to open documentation: {}", e);
            } else {
                app.set_status("Opened documentation in browser");
            }
        }
        Action::Help => app.mode = Mode::Help,

        Action::PointerMoved(column, row) => app.cursor.pointer_moved(column, row),

        Action::PendingG | Action::None => {}
    }
}

fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let size = frame.area();

    // Page background
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg0)),
        size,
    );

    // Fixed header, scrolled body, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    HeaderWidget::render(frame, main_layout[0], app);
    let body = main_layout[1];

    let pinned = app.code_preview_pinned();
    let scroll = app.page.current();

    // Render every section that intersects the viewport
    for extent in app.layout.sections() {
        if extent.id == SectionId::CodePreview && pinned {
            // The pinned window renders fixed over the body below
            continue;
        }

        let section_top = extent.top as i32 - scroll as i32 + body.y as i32;
        let section_bottom = section_top + extent.height as i32;
        let y0 = section_top.max(body.y as i32);
        let y1 = section_bottom.min(body.y as i32 + body.height as i32);
        if y1 <= y0 {
            continue;
        }

        let area = Rect::new(body.x, y0 as u16, body.width, (y1 - y0) as u16);
        let clip_top = (y0 - section_top) as u16;

        match extent.id {
            SectionId::Hero => HeroWidget::render(frame, area, clip_top, app, now),
            SectionId::Features => FeaturesWidget::render(frame, area, clip_top, app, now),
            SectionId::Stats => StatsWidget::render(frame, area, clip_top, app, now),
            SectionId::CodePreview => CodePreviewWidget::render(frame, area, clip_top, app, now),
            SectionId::Frameworks => FrameworksWidget::render(frame, area, clip_top, app, now),
            SectionId::Changelog => ChangelogWidget::render(frame, area, clip_top, app, now),
        }
    }

    if pinned {
        CodePreviewWidget::render(frame, body, 0, app, now);
    }

    // Cursor trail marker
    if let Some((column, row)) = app.cursor.cell() {
        if column < size.width && row < size.height {
            frame.render_widget(
                Paragraph::new("✦").style(Style::default().fg(app.theme.accent)),
                Rect::new(column, row, 1, 1),
            );
        }
    }

    StatusBarWidget::render(frame, main_layout[2], app);

    // Overlays on top
    match app.mode {
        Mode::NavOverlay => NavOverlayWidget::render(frame, app),
        Mode::Help => HelpWidget::render(frame, app),
        Mode::Normal => {}
    }
}

/// Best-effort terminal appearance detection via the COLORFGBG hint some
/// terminals export ("15;0" style, last field is the background color).
/// Unknown environments read as dark.
fn detect_system_appearance() -> Appearance {
    if let Ok(value) = std::env::var("COLORFGBG") {
        if let Some(bg) = value
            .rsplit(';')
            .next()
            .and_then(|s| s.trim().parse::<u8>().ok())
        {
            return if bg == 7 || bg == 15 {
                Appearance::Light
            } else {
                Appearance::Dark
            };
        }
    }
    Appearance::Dark
}
