//! Domain types for SheetBoard.

pub mod submission;

pub use submission::{Submission, Table};
