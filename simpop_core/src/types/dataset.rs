//! Descriptors for the datasets a simulated population source provides.
//!
//! A source root holds one subdirectory per dataset. [`DATASETS`] lists every dataset known to
//! this library; [`find_dataset`] looks one up by name.
//!
//! # Examples
//!
//! ```
//! use simpop_core::types::find_dataset;
//!
//! let census = find_dataset("decennial_census").unwrap();
//! assert_eq!(census.subdirectory, "decennial_census");
//! ```

use anyhow::{Result, bail};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DatasetSchema {
	/// Identifier used on the command line and in messages.
	pub name: &'static str,
	/// Name of the directory below the source root that holds the dataset's files.
	pub subdirectory: &'static str,
	pub title: &'static str,
}

impl DatasetSchema {
	#[must_use]
	pub const fn new(name: &'static str, subdirectory: &'static str, title: &'static str) -> Self {
		Self {
			name,
			subdirectory,
			title,
		}
	}
}

impl fmt::Display for DatasetSchema {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

pub static DATASETS: [DatasetSchema; 7] = [
	DatasetSchema::new("decennial_census", "decennial_census", "Decennial Census"),
	DatasetSchema::new(
		"american_community_survey",
		"american_community_survey",
		"American Community Survey",
	),
	DatasetSchema::new(
		"current_population_survey",
		"current_population_survey",
		"Current Population Survey",
	),
	DatasetSchema::new(
		"women_infants_and_children",
		"women_infants_and_children",
		"Women, Infants, and Children",
	),
	DatasetSchema::new("social_security", "social_security", "Social Security Administration"),
	DatasetSchema::new("taxes_w2_and_1099", "taxes_w2_and_1099", "Tax forms W-2 and 1099"),
	DatasetSchema::new("taxes_1040", "taxes_1040", "Tax form 1040"),
];

/// Looks up a catalog dataset by name. Matching ignores ASCII case and surrounding whitespace.
pub fn find_dataset(name: &str) -> Result<&'static DatasetSchema> {
	let key = name.trim();
	if let Some(dataset) = DATASETS.iter().find(|d| d.name.eq_ignore_ascii_case(key)) {
		return Ok(dataset);
	}
	let known: Vec<&str> = DATASETS.iter().map(|d| d.name).collect();
	bail!("unknown dataset \"{key}\", expected one of: {}", known.join(", "))
}
