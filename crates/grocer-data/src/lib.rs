//! Data ingestion layer for the Corner Grocer tracker.
//!
//! Responsible for reading the transaction input file, building the
//! frequency table and persisting the backup artifact.

pub mod aggregator;
pub mod backup;

pub use grocer_core as core;
