//! Header normalization and row typing for the submission sheet.
//!
//! Steps are order-sensitive: trim header whitespace, rename known headers
//! to canonical names, then coerce the timestamp column. Cell-level
//! timestamp failures degrade to `None`; only a missing timestamp column
//! is an error, because the filter defaults need min/max over it.

use chrono::{NaiveDate, NaiveDateTime};

use super::provider::{RawTable, SchemaError};
use crate::domain::{Submission, Table};

/// The six canonical field names used internally after renaming.
pub const CANONICAL_COLUMNS: [&str; 6] = [
    "timestamp",
    "county",
    "participant_name",
    "phone_number",
    "id_number",
    "geo_coordinates",
];

/// Fixed source-header → canonical-name mapping. Headers not listed here
/// pass through unchanged and become inert surplus columns.
const RENAMES: &[(&str, &str)] = &[
    ("Timestamp", "timestamp"),
    ("County", "county"),
    ("Name of the Participant", "participant_name"),
    ("Verified Phone Number", "phone_number"),
    ("Verified ID Number", "id_number"),
    ("Geo-Coordinates", "geo_coordinates"),
];

/// Timestamp layouts seen in sheet exports. Google Forms writes the
/// `%m/%d/%Y %H:%M:%S` form; the rest cover manually-edited cells.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Trim whitespace off every header and apply the canonical rename map.
/// Cells are untouched; header collisions after trimming are not guarded.
pub fn canonical_headers(mut raw: RawTable) -> RawTable {
    for header in &mut raw.headers {
        let trimmed = header.trim();
        let renamed = RENAMES
            .iter()
            .find(|(from, _)| *from == trimmed)
            .map(|(_, to)| *to);
        *header = renamed.unwrap_or(trimmed).to_owned();
    }
    raw
}

/// Coerce one timestamp cell. Returns `None` for anything unparseable —
/// the pipeline continues with partial data rather than failing.
pub fn parse_timestamp(cell: &str) -> Option<NaiveDateTime> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(cell, fmt) {
            return Some(ts);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cell, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Normalize a raw table into the typed `Table`.
///
/// Fails only when no `timestamp` column exists after renaming. Other
/// canonical columns may be absent; their fields come out empty / `None`.
pub fn normalize(raw: RawTable) -> Result<Table, SchemaError> {
    let raw = canonical_headers(raw);

    let ts_idx = raw
        .column_index("timestamp")
        .ok_or(SchemaError::MissingColumn("timestamp"))?;
    let county_idx = raw.column_index("county");
    let name_idx = raw.column_index("participant_name");
    let phone_idx = raw.column_index("phone_number");
    let id_idx = raw.column_index("id_number");
    let geo_idx = raw.column_index("geo_coordinates");

    let rows = raw
        .rows
        .iter()
        .map(|row| {
            let cell = |idx: Option<usize>| {
                idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
            };
            let county = cell(county_idx);

            Submission {
                timestamp: row.get(ts_idx).map(String::as_str).and_then(parse_timestamp),
                county: (!county.is_empty()).then_some(county),
                participant_name: cell(name_idx),
                phone_number: cell(phone_idx),
                id_number: cell(id_idx),
                geo_coordinates: cell(geo_idx),
            }
        })
        .collect();

    Ok(rows)
}
