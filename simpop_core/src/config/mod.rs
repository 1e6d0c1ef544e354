//! simpop configuration.
//!
//! The configuration is usually read from a YAML file; every field has a default, so an empty
//! document is a valid configuration:
//!
//! ```yaml
//! changelog: CHANGELOG.rst
//! compatibility:
//!   minimum: 1.4.2
//!   maximum: 1.4.3
//! progress:
//!   mode: auto
//! ```

mod progress;

pub use progress::ProgressConfig;

use crate::{progress::ProgressMode, types::VersionRange};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.rst";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// File name of the changelog at the root of a data source.
	#[serde(default = "default_changelog")]
	pub changelog: String,

	/// Data versions this release can read: minimum inclusive, maximum exclusive.
	#[serde(default)]
	pub compatibility: VersionRange,

	#[serde(default)]
	pub progress: ProgressConfig,
}

fn default_changelog() -> String {
	DEFAULT_CHANGELOG.to_string()
}

impl Default for Config {
	fn default() -> Self {
		Self {
			changelog: default_changelog(),
			compatibility: VersionRange::default(),
			progress: ProgressConfig::default(),
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		log::debug!("loading config {path:?}");
		let file = File::open(path).with_context(|| format!("Failed to open config file \"{}\"", path.display()))?;
		Config::from_reader(BufReader::new(file))
			.with_context(|| format!("Failed to parse config file \"{}\"", path.display()))
	}

	/// Loads the file if a path is given, otherwise returns the defaults.
	pub fn from_optional_path(path: Option<&Path>) -> Result<Self> {
		path.map_or_else(|| Ok(Config::default()), Config::from_path)
	}

	pub fn to_yaml(&self) -> Result<String> {
		Ok(serde_yaml_ng::to_string(self)?)
	}

	pub fn override_optional_changelog(&mut self, changelog: &Option<String>) {
		if let Some(changelog) = changelog {
			self.changelog = changelog.clone();
		}
	}

	pub fn override_optional_progress_mode(&mut self, mode: &Option<ProgressMode>) {
		if let Some(mode) = mode {
			self.progress.mode = *mode;
		}
	}
}
