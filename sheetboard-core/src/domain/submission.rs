//! Submission — one normalized row of the published sheet.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single field submission after normalization.
///
/// `timestamp` is `None` when the source cell could not be parsed (the
/// coerce-to-null policy); `county` is `None` when the cell was empty.
/// The remaining fields are carried verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub timestamp: Option<NaiveDateTime>,
    pub county: Option<String>,
    pub participant_name: String,
    pub phone_number: String,
    pub id_number: String,
    pub geo_coordinates: String,
}

/// Ordered collection of submissions. Row order is source row order, and
/// every transform in this crate preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Submission>,
}

impl Table {
    pub fn new(rows: Vec<Submission>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Submission] {
        &self.rows
    }

    /// Number of rows — "Total Submissions" on the dashboard.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct non-null county values, sorted. This is what populates the
    /// county multi-select; rows with no county never contribute.
    pub fn distinct_counties(&self) -> BTreeSet<&str> {
        self.rows
            .iter()
            .filter_map(|row| row.county.as_deref())
            .collect()
    }

    /// "Total Counties Submitted" on the dashboard.
    pub fn distinct_county_count(&self) -> usize {
        self.distinct_counties().len()
    }

    /// Min and max timestamp over rows that have one. `None` when no row
    /// has a parseable timestamp.
    pub fn timestamp_bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut bounds: Option<(NaiveDateTime, NaiveDateTime)> = None;
        for ts in self.rows.iter().filter_map(|row| row.timestamp) {
            bounds = Some(match bounds {
                None => (ts, ts),
                Some((min, max)) => (min.min(ts), max.max(ts)),
            });
        }
        bounds
    }
}

impl FromIterator<Submission> for Table {
    fn from_iter<I: IntoIterator<Item = Submission>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
