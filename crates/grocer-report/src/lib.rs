//! Reporting layer for the Corner Grocer tracker.
//!
//! [`reporter`] holds the pure queries over a frequency table; [`render`]
//! turns their results into display text, optionally color-coded.

pub mod render;
pub mod reporter;

pub use grocer_core as core;
