//! SheetBoard Core — the data pipeline behind the submission dashboard.
//!
//! This crate contains everything except presentation:
//! - Domain types (submissions, the in-memory table)
//! - Sheet source trait + the Google Sheets CSV export fetcher
//! - Header normalization and timestamp coercion
//! - TTL cache with manual invalidation
//! - Date-range / county filter engine and the two summary statistics

pub mod data;
pub mod domain;
pub mod filter;

pub use data::{load_sheet, DataError, SheetCache, SheetSource};
pub use domain::{Submission, Table};
pub use filter::FilterState;
