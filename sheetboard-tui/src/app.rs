//! Application state — single-owner, main-thread only.
//!
//! Every interaction runs one synchronous pass: (maybe) cache lookup →
//! fetch + normalize → filter → render. There is no worker thread; the
//! refresh fetch blocks the event loop until it completes or fails.

use std::time::Duration;

use sheetboard_core::data::{load_sheet, SheetCache, SheetSource};
use sheetboard_core::domain::Table;
use sheetboard_core::filter::{self, FilterState};

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filters,
    Table,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Filters => Focus::Table,
            Focus::Table => Focus::Filters,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

pub struct AppState {
    source: Box<dyn SheetSource>,
    pub cache: SheetCache,

    /// Full normalized table, as last loaded. Stays at its previous value
    /// when a refresh fails.
    pub table: Table,
    /// Current filter selection; `None` until a table with at least one
    /// parseable timestamp has been loaded.
    pub filter: Option<FilterState>,
    /// Derived view, recomputed after every mutation.
    pub filtered: Table,

    pub focus: Focus,
    /// Cursor into the distinct-county list in the sidebar.
    pub county_cursor: usize,
    pub table_scroll: usize,
    pub show_help: bool,
    pub status: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(source: Box<dyn SheetSource>, ttl: Duration) -> Self {
        Self {
            source,
            cache: SheetCache::new(ttl),
            table: Table::default(),
            filter: None,
            filtered: Table::default(),
            focus: Focus::Filters,
            county_cursor: 0,
            table_scroll: 0,
            show_help: false,
            status: None,
            running: true,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), StatusLevel::Info));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), StatusLevel::Error));
    }

    /// Cache lookup, fetching through the source when empty or stale.
    /// On failure the previous table (and filter) stay on screen; the
    /// error lands in the status bar.
    pub fn reload(&mut self) {
        let source = &self.source;
        let loaded = self
            .cache
            .get_or_load(|| load_sheet(source.as_ref()))
            .map(Table::clone);
        match loaded {
            Ok(table) => {
                self.table = table;
                if self.filter.is_none() {
                    self.filter = FilterState::from_table(&self.table);
                }
                self.set_status(format!(
                    "Loaded {} submissions from {}",
                    self.table.count(),
                    self.source.name()
                ));
            }
            Err(e) => self.set_error(e.to_string()),
        }
        self.recompute();
    }

    /// Manual refresh: drop the cache entry and reload unconditionally.
    pub fn refresh(&mut self) {
        self.cache.invalidate();
        self.reload();
    }

    /// Recompute the derived view from (table, filter) and clamp cursors.
    pub fn recompute(&mut self) {
        self.filtered = match &self.filter {
            Some(state) => filter::apply(&self.table, state),
            None => Table::default(),
        };

        let counties = self.table.distinct_county_count();
        self.county_cursor = self.county_cursor.min(counties.saturating_sub(1));
        self.table_scroll = self
            .table_scroll
            .min(self.filtered.count().saturating_sub(1));
    }

    /// Distinct counties of the *full* table — the selectable set.
    pub fn counties(&self) -> Vec<String> {
        self.table
            .distinct_counties()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn total_submissions(&self) -> usize {
        self.filtered.count()
    }

    pub fn total_counties(&self) -> usize {
        self.filtered.distinct_county_count()
    }

    // ── Filter mutations (each ends in a recompute) ──────────────────

    pub fn toggle_county_at_cursor(&mut self) {
        let counties = self.counties();
        if let Some(county) = counties.get(self.county_cursor) {
            if let Some(state) = &mut self.filter {
                state.toggle_county(county);
                self.recompute();
            }
        }
    }

    pub fn select_all_counties(&mut self) {
        if let Some(state) = &mut self.filter {
            state.select_all(&self.table);
            self.recompute();
        }
    }

    pub fn clear_county_selection(&mut self) {
        if let Some(state) = &mut self.filter {
            state.clear_selection();
            self.recompute();
        }
    }

    pub fn shift_start_date(&mut self, days: i64) {
        if let Some(state) = &mut self.filter {
            state.start_date += chrono::Duration::days(days);
            self.recompute();
        }
    }

    pub fn shift_end_date(&mut self, days: i64) {
        if let Some(state) = &mut self.filter {
            state.end_date += chrono::Duration::days(days);
            self.recompute();
        }
    }

    pub fn move_county_cursor(&mut self, delta: i64) {
        let max = self.table.distinct_county_count().saturating_sub(1);
        let next = self.county_cursor as i64 + delta;
        self.county_cursor = next.clamp(0, max as i64) as usize;
    }

    pub fn scroll_table(&mut self, delta: i64) {
        let max = self.filtered.count().saturating_sub(1);
        let next = self.table_scroll as i64 + delta;
        self.table_scroll = next.clamp(0, max as i64) as usize;
    }
}
