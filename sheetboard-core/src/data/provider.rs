//! Sheet source trait and structured error types.
//!
//! `SheetSource` abstracts over where the raw table comes from (the live
//! CSV export in production, in-memory stubs in tests) so the pipeline and
//! cache can be exercised without a network.

use thiserror::Error;

/// Raw tabular data exactly as fetched: one header row plus string cells.
///
/// Columns are whatever the source published — canonical names only exist
/// after `normalize::canonical_headers` has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Fetch-stage failures: the network request or the CSV body was bad.
/// Never retried automatically — the caller decides when to ask again.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Normalize-stage failure: a column the pipeline cannot run without is
/// absent after renaming. Cell-level parse failures are *not* errors; they
/// degrade to `None` in the typed table.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("required column '{0}' missing after renaming")]
    MissingColumn(&'static str),
}

/// Umbrella error for the composed fetch → normalize pipeline.
#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Source(#[from] DataSourceError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Trait for raw table sources.
///
/// The cache layer sits above this trait — sources don't know about it.
pub trait SheetSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch the raw table. Blocking; runs to completion or fails outright.
    fn fetch(&self) -> Result<RawTable, DataSourceError>;
}
