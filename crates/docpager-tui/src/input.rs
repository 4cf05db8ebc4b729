use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    ToggleNavPanel,
    CloseNavPanel,
    NextItem, // Move the activation cursor forward
    PrevItem,
    Activate, // Follow the focused link or trigger the focused copy control
    CopyCode, // Copy the focused or first visible code block
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToBottom,

        // Nav panel
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleNavPanel,
        (KeyCode::Esc, KeyModifiers::NONE) => {
            if app.nav_panel_open() {
                Action::CloseNavPanel
            } else {
                Action::None
            }
        }

        // Interactive elements
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextItem,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevItem,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Activate,
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::CopyCode,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use docpager_core::{AppConfig, Page};

    fn app() -> App {
        let page = Page::from_json(
            r##"{
                "navbar": {"brand": "x", "menu_trigger": true,
                           "links": [{"label": "Top", "href": "#top"}]},
                "blocks": [{"id": "top", "role": "heading", "title": "Top"}]
            }"##,
        )
        .unwrap();
        App::new(page, AppConfig::default(), crate::Theme::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_bindings() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('m')), &app),
            Action::ToggleNavPanel
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('y')), &app),
            Action::CopyCode
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Activate);
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        let mut app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_escape_only_closes_open_panel() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::None);
        app.toggle_nav_panel();
        assert!(app.nav_panel_open());
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &app),
            Action::CloseNavPanel
        );
    }
}
