use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    // Page scrolling
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    // Code preview tabs
    NextTab,
    PrevTab,
    SelectTab(usize), // Number keys 1..=9
    // Page actions
    ToggleTheme,
    CopyCode,
    CopyInstall,
    OpenNav,
    OpenDocs,
    Help,
    // Navigation overlay
    MoveDown,
    MoveUp,
    Select,
    ExitMode,
    // Pointer
    PointerMoved(u16, u16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    match app.mode {
        Mode::NavOverlay => return handle_nav_overlay(key),
        Mode::Help => {
            // Any key exits help
            return Action::ExitMode;
        }
        Mode::Normal => {}
    }

    let binding = KeyBinding::new(key.code, key.modifiers);

    // 'gg' sequence
    if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            return keymap.pending_g_action().copied().unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Shifted characters ('?', '{', ...) arrive with the SHIFT modifier
    // set; retry against the bare binding
    if key.modifiers == KeyModifiers::SHIFT {
        if let KeyCode::Char(c) = key.code {
            if let Some(action) = keymap.get(&KeyBinding::simple(KeyCode::Char(c))) {
                return *action;
            }
        }
    }

    // Direct tab selection on number keys
    if let KeyCode::Char(c) = key.code {
        if let Some(digit) = c.to_digit(10) {
            if digit >= 1 {
                return Action::SelectTab(digit as usize - 1);
            }
        }
    }

    Action::None
}

/// Handle key events while the navigation overlay is open
fn handle_nav_overlay(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Select,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => Action::ExitMode,
        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Action::PointerMoved(mouse.column, mouse.row)
        }
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};
    use showcase_core::AppConfig;

    fn test_app() -> App {
        App::for_testing(AppConfig::default(), 140, 40)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings_map_to_actions() {
        let app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &app, &keymap),
            Action::ToggleTheme
        );
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let app = test_app();
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), &app, &keymap),
            Action::SelectTab(0)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app, &keymap),
            Action::SelectTab(2)
        );
    }

    #[test]
    fn test_shifted_char_falls_back_to_bare_binding() {
        let app = test_app();
        let keymap = Keymap::default();
        let help = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(help, &app, &keymap), Action::Help);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = test_app();
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_nav_overlay_keys() {
        let mut app = test_app();
        app.mode = Mode::NavOverlay;
        let keymap = Keymap::default();

        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::MoveDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &app, &keymap),
            Action::Select
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &app, &keymap),
            Action::ExitMode
        );
        // Page bindings do not leak through the overlay
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &app, &keymap),
            Action::None
        );
    }

    #[test]
    fn test_mouse_events() {
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(moved), Action::PointerMoved(12, 7));

        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(wheel), Action::ScrollDown);

        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(press), Action::None);
    }
}
