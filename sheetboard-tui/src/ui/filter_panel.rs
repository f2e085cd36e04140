//! Filters sidebar — date-range steppers, county multi-select, cache state.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    // Cache freshness
    let (dot, style) = if app.cache.is_fresh() {
        ("●", theme::positive())
    } else {
        ("○", theme::warning())
    };
    let age = app
        .cache
        .age()
        .map(|a| format!("{}s/{}s", a.as_secs(), app.cache.ttl().as_secs()))
        .unwrap_or_else(|| "empty".into());
    lines.push(Line::from(vec![
        Span::styled("Cache ", theme::muted()),
        Span::styled(dot, style),
        Span::styled(format!(" {age}  [r]efresh"), theme::muted()),
    ]));
    lines.push(Line::from(""));

    let Some(state) = &app.filter else {
        lines.push(Line::from(Span::styled(
            "No dated submissions loaded yet.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    };

    // Date range
    lines.push(Line::from(vec![
        Span::styled("From ", theme::muted()),
        Span::styled(state.start_date.to_string(), theme::accent()),
        Span::styled("  [/]", theme::muted()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("To   ", theme::muted()),
        Span::styled(state.end_date.to_string(), theme::accent()),
        Span::styled("  {/}", theme::muted()),
    ]));
    lines.push(Line::from(""));

    // County multi-select
    let counties = app.counties();
    lines.push(Line::from(vec![
        Span::styled("Counties ", theme::muted()),
        Span::styled(
            format!("{}/{}", state.counties.len(), counties.len()),
            theme::accent(),
        ),
        Span::styled("  [Space]toggle [a]ll [n]one", theme::muted()),
    ]));

    for (i, county) in counties.iter().enumerate() {
        let is_cursor = i == app.county_cursor;
        let check = if state.is_selected(county) {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::text_secondary()
        };
        lines.push(Line::from(Span::styled(
            format!(" {check} {county}"),
            style,
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
