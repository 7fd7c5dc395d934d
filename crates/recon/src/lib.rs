//! `winrank-recon`: rank-ordered winner list reconciliation.
//!
//! Parses a reconciled table and a winners list, compares them position by
//! position, and writes the rows that agree. No CLI dependencies.

pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod reconciled;
pub mod winners;

pub use compare::compare;
pub use config::CompareConfig;
pub use error::ReconError;
pub use model::{ComparisonResult, MatchedRecord, Mismatch, ReconciledRecord, WinnerRecord};
