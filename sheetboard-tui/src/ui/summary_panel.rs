//! Metrics row — Total Submissions and Total Counties Submitted.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    metric(
        f,
        cells[0],
        "Total Submissions",
        app.total_submissions(),
    );
    metric(
        f,
        cells[1],
        "Total Counties Submitted",
        app.total_counties(),
    );
}

fn metric(f: &mut Frame, area: Rect, label: &str, value: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(label, theme::text_secondary())),
        Line::from(Span::styled(value.to_string(), theme::metric_value())),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
