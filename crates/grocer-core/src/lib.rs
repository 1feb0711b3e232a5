//! Shared domain layer for the Corner Grocer tracker.
//!
//! Holds the frequency-table model, demand classification, the error type,
//! CLI settings and small formatting helpers used by the reporting layer.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{GrocerError, Result};
