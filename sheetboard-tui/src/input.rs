//! Keyboard input dispatch — global keys first, then the focused pane.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Focus};

/// Handle a key event, mutating app state. Every mutation path ends in a
/// recompute, so the next draw always reflects the current filter.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Help overlay swallows everything until dismissed.
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('r') => {
            app.refresh();
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.next();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Filters => handle_filters_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_filters_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_county_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_county_cursor(-1),
        KeyCode::Char(' ') => app.toggle_county_at_cursor(),
        KeyCode::Char('a') => app.select_all_counties(),
        KeyCode::Char('n') => app.clear_county_selection(),
        KeyCode::Char('[') => app.shift_start_date(-1),
        KeyCode::Char(']') => app.shift_start_date(1),
        KeyCode::Char('{') => app.shift_end_date(-1),
        KeyCode::Char('}') => app.shift_end_date(1),
        _ => {}
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_table(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_table(-1),
        KeyCode::PageDown => app.scroll_table(10),
        KeyCode::PageUp => app.scroll_table(-10),
        KeyCode::Char('g') => app.table_scroll = 0,
        KeyCode::Char('G') => app.scroll_table(i64::MAX / 2),
        _ => {}
    }
}
