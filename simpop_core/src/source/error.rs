use crate::types::{DataVersion, VersionRange};
use std::{io, path::PathBuf};

/// Errors raised while validating a simulated population data source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	#[error(
		"Could not find '{subdirectory}' in '{}'. Please check that the provided source directory is correct. \
		 If providing a source, a directory should exist for each dataset.",
		.root.display()
	)]
	DatasetNotFound { subdirectory: String, root: PathBuf },

	#[error(transparent)]
	DataSource(#[from] DataSourceError),

	#[error("failed to read '{}'", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl SourceError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		SourceError::Io {
			path: path.into(),
			source,
		}
	}

	/// True for a missing dataset directory or a missing file.
	#[must_use]
	pub fn is_not_found(&self) -> bool {
		match self {
			SourceError::DatasetNotFound { .. } => true,
			SourceError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
			SourceError::DataSource(_) => false,
		}
	}

	#[must_use]
	pub fn as_data_source_error(&self) -> Option<&DataSourceError> {
		match self {
			SourceError::DataSource(err) => Some(err),
			_ => None,
		}
	}
}

/// The data source exists but its release cannot be read by this library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataSourceError {
	#[error(
		"The provided simulated population data is incompatible with this version of simpop ({library}).\n\
		 An older version of simulated population data has been provided.\n\
		 Please either request updated simulated population data or downgrade the simpop package.",
		library = crate::LIBRARY_VERSION
	)]
	Outdated,

	#[error(
		"The provided simulated population data is incompatible with this version of simpop ({library}).\n\
		 The simulated population data has been corrupted.\n\
		 Found data version {version}, the lowest readable version is {}.\n\
		 Please re-download the simulated population data.",
		.range.minimum(),
		library = crate::LIBRARY_VERSION
	)]
	Corrupted { version: DataVersion, range: VersionRange },

	#[error(
		"The provided simulated population data is incompatible with this version of simpop ({library}).\n\
		 A newer version of simulated population data has been provided.\n\
		 Found data version {version}, this release reads versions {range}.\n\
		 Please upgrade the simpop package.",
		library = crate::LIBRARY_VERSION
	)]
	Newer { version: DataVersion, range: VersionRange },

	#[error(
		"The changelog '{}' does not start with a heading like \"**1.4.2 - date**\".",
		.path.display()
	)]
	MalformedChangelog { path: PathBuf },
}
