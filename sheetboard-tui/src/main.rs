//! SheetBoard TUI — live dashboard over the published submission sheet.
//!
//! Layout:
//! - metrics row: Total Submissions, Total Counties Submitted
//! - sidebar: date-range steppers and county multi-select
//! - main panel: the filtered submission table
//! - status bar: key hints and the last status or error
//!
//! Execution model is a plain event loop: render, wait for a key, mutate
//! state, recompute the filtered view. The refresh fetch blocks the loop;
//! there are no background threads.

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use sheetboard_core::data::{CsvExportSource, DEFAULT_TTL};

use crate::app::AppState;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let source = CsvExportSource::default();
    let mut app = AppState::new(Box::new(source), DEFAULT_TTL);

    // Initial load happens before the first draw, like a page load.
    app.reload();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Block briefly for input; the timeout keeps the cache-age display
        // ticking even when no keys arrive.
        if event::poll(Duration::from_millis(500))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            return Ok(());
        }
    }
}
