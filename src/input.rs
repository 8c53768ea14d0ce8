//! Keyboard and mouse routing
//!
//! Global keys are handled here; everything else goes to the active panel.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode, Tab};
use crate::core::Action;
use crate::ui::layout::{self, SidebarHit};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.quick_create_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.apply_action(Action::CloseOverlay);
        }
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.apply_action(Action::CloseOverlay);
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.apply_action(Action::OpenHelp),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char(':') => app.enter_command(),
        KeyCode::Char('f') => app.cycle_status_filter(true),
        KeyCode::Char('F') => app.cycle_status_filter(false),
        KeyCode::Char('+') => app.apply_action(Action::OpenQuickCreate),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(tab) = Tab::from_shortcut(c) {
                app.select_tab(tab);
            }
        }
        _ => {
            let action = app.dispatch_panel_key(key);
            app.apply_action(action);
        }
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.exit_search(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.push_query_char(ch);
        }
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// `size` is the full terminal area the last frame was drawn into
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.quick_create_open || app.input_mode != InputMode::Normal {
        return;
    }
    let areas = layout::areas(size);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match layout::sidebar_hit(&areas, mouse.column, mouse.row) {
                Some(SidebarHit::Tab(tab)) => app.select_tab(tab),
                Some(SidebarHit::Filter(filter)) => app.set_status_filter(filter),
                None => {}
            }
        }
        MouseEventKind::ScrollDown if rect_contains(areas.sidebar, mouse.column, mouse.row) => {
            app.next_tab()
        }
        MouseEventKind::ScrollUp if rect_contains(areas.sidebar, mouse.column, mouse.row) => {
            app.prev_tab()
        }
        _ => {}
    }
}

fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusFilter;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shortcuts_select_tabs() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.view.active_tab, Tab::Media);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view.active_tab, Tab::Dashboard);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.view.active_tab, Tab::Media);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::new();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quick_create_swallows_keys() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('+')));
        assert!(app.quick_create_open);
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.view.active_tab, Tab::Dashboard);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.quick_create_open);
    }

    #[test]
    fn test_search_keeps_digits_in_query() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::Char('/')));
        for c in "2026".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.view.query, "2026");
        assert_eq!(app.view.active_tab, Tab::Dashboard);
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.view.query, "2026");
    }

    #[test]
    fn test_click_sidebar() {
        let mut app = App::new();
        let size = Rect::new(0, 0, 120, 40);
        let areas = layout::areas(size);
        let row = areas.sidebar.y + 1 + layout::SIDEBAR_CHIP_ROW + 3;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: areas.sidebar.x + 3,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, click, size);
        assert_eq!(app.view.status_filter, StatusFilter::Scheduled);

        let click = MouseEvent {
            row: areas.sidebar.y + 2,
            ..click
        };
        handle_mouse(&mut app, click, size);
        assert_eq!(app.view.active_tab, Tab::Content);
    }
}
