//! Top-level UI layout — metrics row, filters sidebar, table, status bar.

pub mod filter_panel;
pub mod overlays;
pub mod status_bar;
pub mod summary_panel;
pub mod table_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: metrics row + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    summary_panel::render(f, chunks[0], app);

    // Main area: filters sidebar + submission table.
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(20)])
        .split(chunks[1]);

    draw_pane(
        f,
        main[0],
        " Filters ",
        app.focus == Focus::Filters,
        |f, inner| filter_panel::render(f, inner, app),
    );
    draw_pane(
        f,
        main[1],
        " Submissions ",
        app.focus == Focus::Table,
        |f, inner| table_panel::render(f, inner, app),
    );

    status_bar::render(f, chunks[2], app);

    if app.show_help {
        overlays::render_help(f, chunks[1]);
    }
}

fn draw_pane(
    f: &mut Frame,
    area: Rect,
    title: &str,
    active: bool,
    render: impl FnOnce(&mut Frame, Rect),
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(title)
        .title_style(theme::panel_title(active));

    let inner = block.inner(area);
    f.render_widget(block, area);
    render(f, inner);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
