//! Checks that a simulated population data source can be read by this library.
//!
//! A valid source root looks like this:
//!
//! ```text
//! source/
//! ├── CHANGELOG.rst
//! ├── decennial_census/
//! ├── american_community_survey/
//! └── ...
//! ```
//!
//! Validation of a dataset succeeds when its subdirectory exists and the changelog's top entry
//! lies within the configured [`VersionRange`].

use super::{DataSourceError, SourceError, ValidationReport, get_data_changelog_version};
use crate::{
	config::Config,
	progress::{ProgressIterExt, ProgressOptions, ProgressReporter},
	types::{Compatibility, DatasetSchema, VersionRange},
};
use std::path::{Path, PathBuf};

/// Validates a data source against the default configuration of this release.
pub fn validate_source_compatibility(source: &Path, dataset: &DatasetSchema) -> Result<(), SourceError> {
	SourceValidator::default().validate(source, dataset)
}

#[derive(Clone, Debug)]
pub struct SourceValidator {
	range: VersionRange,
	changelog: String,
}

impl Default for SourceValidator {
	fn default() -> Self {
		Self::new(&Config::default())
	}
}

impl SourceValidator {
	#[must_use]
	pub fn new(config: &Config) -> Self {
		Self {
			range: config.compatibility,
			changelog: config.changelog.clone(),
		}
	}

	#[must_use]
	pub fn range(&self) -> VersionRange {
		self.range
	}

	#[must_use]
	pub fn changelog_path(&self, source: &Path) -> PathBuf {
		source.join(&self.changelog)
	}

	pub fn validate(&self, source: &Path, dataset: &DatasetSchema) -> Result<(), SourceError> {
		if !source.join(dataset.subdirectory).is_dir() {
			return Err(SourceError::DatasetNotFound {
				subdirectory: dataset.subdirectory.to_string(),
				root: source.to_path_buf(),
			});
		}

		let changelog = self.changelog_path(source);
		if !changelog.is_file() {
			log::debug!("no changelog at {changelog:?}");
			return Err(DataSourceError::Outdated.into());
		}

		let version = get_data_changelog_version(&changelog)?;
		match self.range.check(version) {
			Compatibility::TooOld => Err(DataSourceError::Corrupted {
				version,
				range: self.range,
			}
			.into()),
			Compatibility::TooNew => Err(DataSourceError::Newer {
				version,
				range: self.range,
			}
			.into()),
			Compatibility::Compatible => {
				log::info!("{dataset}: data version {version} is compatible");
				Ok(())
			}
		}
	}

	/// Validates every dataset in `datasets`, reporting one progress step per dataset.
	///
	/// Unlike [`SourceValidator::validate`] this does not stop at the first failure.
	pub fn validate_all<'a, I>(&self, source: &Path, datasets: I, reporter: &dyn ProgressReporter) -> ValidationReport
	where
		I: IntoIterator<Item = &'a DatasetSchema>,
	{
		let datasets: Vec<&DatasetSchema> = datasets.into_iter().collect();
		let options = ProgressOptions::new("Validating datasets").unit("dataset");

		let mut report = ValidationReport::new(source);
		for dataset in datasets.into_iter().progress(reporter, options) {
			report.push(dataset, self.validate(source, dataset));
		}
		report
	}
}
