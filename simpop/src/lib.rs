//! # simpop
//!
//! simpop checks whether a directory of simulated population data can be read by this release
//! and provides the progress reporting used by long running data tasks.
//!
//! ## Usage Example
//!
//! ```no_run
//! use simpop::core::{source::validate_source_compatibility, types::find_dataset};
//! use std::path::Path;
//!
//! let census = find_dataset("decennial_census").unwrap();
//! match validate_source_compatibility(Path::new("/data/simulated"), census) {
//!     Ok(()) => println!("source is compatible"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub use simpop_core as core;
