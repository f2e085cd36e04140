//! Submission table — the filtered rows, scrollable.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    if app.filtered.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No submissions match the current filter.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            "{:<20} {:<12} {:<24} {:<14} {:<10} {}",
            "Timestamp", "County", "Participant", "Phone", "ID", "Geo"
        ),
        theme::accent_bold(),
    )));

    // Visible rows
    let visible_height = area.height.saturating_sub(2) as usize;
    let start = app.table_scroll.min(app.filtered.count().saturating_sub(1));
    let end = (start + visible_height).min(app.filtered.count());

    for row in &app.filtered.rows()[start..end] {
        let ts = row
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!(
                "{:<20} {:<12} {:<24} {:<14} {:<10} {}",
                ts,
                row.county.as_deref().unwrap_or("-"),
                truncate(&row.participant_name, 23),
                row.phone_number,
                row.id_number,
                row.geo_coordinates
            ),
            theme::text_secondary(),
        )));
    }

    // Footer: position indicator
    lines.push(Line::from(Span::styled(
        format!("rows {}-{} of {}", start + 1, end, app.filtered.count()),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_owned()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
