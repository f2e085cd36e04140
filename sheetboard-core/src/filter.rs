//! Date-range and county filtering over a loaded table.
//!
//! Pure, stateless transform: (table, filter state) → derived table. The
//! two dashboard metrics are `Table::count` and
//! `Table::distinct_county_count` over the output.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::{Submission, Table};

/// Current filter selection. Defaults come from the loaded table via
/// `from_table`; user input mutates it in place. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Inclusive start of the date range.
    pub start_date: NaiveDate,
    /// Inclusive end of the date range.
    pub end_date: NaiveDate,
    /// Selected county values. Membership is exact-match.
    pub counties: BTreeSet<String>,
}

impl FilterState {
    /// Default state: observed min/max submission dates and every distinct
    /// county selected. `None` when no row has a parseable timestamp.
    pub fn from_table(table: &Table) -> Option<Self> {
        let (min, max) = table.timestamp_bounds()?;
        Some(Self {
            start_date: min.date(),
            end_date: max.date(),
            counties: table
                .distinct_counties()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
    }

    pub fn select_all(&mut self, table: &Table) {
        self.counties = table
            .distinct_counties()
            .into_iter()
            .map(str::to_owned)
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.counties.clear();
    }

    pub fn toggle_county(&mut self, county: &str) {
        if !self.counties.remove(county) {
            self.counties.insert(county.to_owned());
        }
    }

    pub fn is_selected(&self, county: &str) -> bool {
        self.counties.contains(county)
    }
}

/// Apply the filter, preserving row order.
///
/// A row is kept iff its timestamp is present with a date inside
/// `[start_date, end_date]` and its county is present and selected.
/// Null-county rows are never kept — the selectable set is derived from
/// non-null values only. An inverted range or an empty selection yields an
/// empty table; both are defined behavior, not errors.
pub fn apply(table: &Table, filter: &FilterState) -> Table {
    table
        .rows()
        .iter()
        .filter(|row| keep(row, filter))
        .cloned()
        .collect()
}

fn keep(row: &Submission, filter: &FilterState) -> bool {
    let Some(ts) = row.timestamp else {
        return false;
    };
    let date = ts.date();
    if date < filter.start_date || date > filter.end_date {
        return false;
    }
    match &row.county {
        Some(county) => filter.counties.contains(county),
        None => false,
    }
}
