//! Validation of simulated population data sources.
//!
//! # Examples
//!
//! ```no_run
//! use simpop_core::{source::validate_source_compatibility, types::find_dataset};
//! use std::path::Path;
//!
//! let census = find_dataset("decennial_census").unwrap();
//! validate_source_compatibility(Path::new("/data/simulated"), census).unwrap();
//! ```

mod changelog;
mod error;
mod report;
mod validator;

pub use changelog::{ChangelogEntry, get_data_changelog_version, read_changelog_head};
pub use error::{DataSourceError, SourceError};
pub use report::ValidationReport;
pub use validator::{SourceValidator, validate_source_compatibility};
