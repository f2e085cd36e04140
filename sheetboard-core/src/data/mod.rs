//! Sheet ingestion and caching.

pub mod cache;
pub mod normalize;
pub mod provider;
pub mod sheet_csv;

pub use cache::{SheetCache, DEFAULT_TTL};
pub use normalize::{canonical_headers, normalize, CANONICAL_COLUMNS};
pub use provider::{DataError, DataSourceError, RawTable, SchemaError, SheetSource};
pub use sheet_csv::{export_url, parse_csv, CsvExportSource, DEFAULT_SHEET_ID};

use crate::domain::Table;

/// Fetch and normalize in one step — the loader the cache composes.
pub fn load_sheet(source: &dyn SheetSource) -> Result<Table, DataError> {
    let raw = source.fetch()?;
    Ok(normalize::normalize(raw)?)
}
