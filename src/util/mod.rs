//! Utility types for the directory generator.
//!
//! - [`telemetry`] - Structured logging setup

pub mod telemetry;

pub use telemetry::*;
