//! Help overlay.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect;
use crate::theme;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help ")
        .title_style(theme::accent_bold());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "q", "Quit");
    key(&mut lines, "r", "Refresh: drop the cache and refetch the sheet");
    key(&mut lines, "Tab", "Switch focus between Filters and Submissions");
    key(&mut lines, "?", "Toggle this help");
    lines.push(Line::from(""));

    section(&mut lines, "Filters");
    key(&mut lines, "j / k", "Move the county cursor");
    key(&mut lines, "Space", "Toggle the county under the cursor");
    key(&mut lines, "a / n", "Select all / no counties");
    key(&mut lines, "[ / ]", "Start date back / forward one day");
    key(&mut lines, "{ / }", "End date back / forward one day");
    lines.push(Line::from(""));

    section(&mut lines, "Submissions");
    key(&mut lines, "j / k", "Scroll rows");
    key(&mut lines, "PgUp / PgDn", "Scroll a screenful");
    key(&mut lines, "g / G", "Jump to first / last row");

    f.render_widget(Paragraph::new(lines), inner);
}

fn section(lines: &mut Vec<Line>, title: &'static str) {
    lines.push(Line::from(Span::styled(title, theme::accent_bold())));
}

fn key(lines: &mut Vec<Line>, keys: &'static str, what: &'static str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:<12}"), theme::accent()),
        Span::styled(what, theme::text_secondary()),
    ]));
}
