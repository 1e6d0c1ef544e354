//! Core building blocks of simpop: version types, the dataset catalog, the source compatibility
//! validator, configuration and progress reporting.

pub mod config;

pub mod progress;

pub mod source;

pub mod types;

/// Version of this library, reported in incompatibility messages.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
