//! The half-open range `[minimum, maximum)` of data versions a library release can read.

use super::DataVersion;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing a data version against a [`VersionRange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compatibility {
	/// Below the minimum. Releases below the floor were never published for this library.
	TooOld,
	Compatible,
	/// At or above the maximum.
	TooNew,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawVersionRange", into = "RawVersionRange")]
pub struct VersionRange {
	minimum: DataVersion,
	maximum: DataVersion,
}

impl VersionRange {
	/// Creates a range containing `minimum` and every version up to, but excluding, `maximum`.
	pub fn new(minimum: DataVersion, maximum: DataVersion) -> Result<Self> {
		ensure!(
			minimum < maximum,
			"version range is empty: minimum {minimum} must be lower than maximum {maximum}"
		);
		Ok(Self { minimum, maximum })
	}

	#[must_use]
	pub fn minimum(&self) -> DataVersion {
		self.minimum
	}

	#[must_use]
	pub fn maximum(&self) -> DataVersion {
		self.maximum
	}

	#[must_use]
	pub fn check(&self, version: DataVersion) -> Compatibility {
		if version < self.minimum {
			Compatibility::TooOld
		} else if version >= self.maximum {
			Compatibility::TooNew
		} else {
			Compatibility::Compatible
		}
	}

	#[must_use]
	pub fn contains(&self, version: DataVersion) -> bool {
		self.check(version) == Compatibility::Compatible
	}
}

impl Default for VersionRange {
	/// The data releases understood by this version of the library.
	fn default() -> Self {
		Self {
			minimum: DataVersion::new(1, 4, 2),
			maximum: DataVersion::new(1, 4, 3),
		}
	}
}

impl fmt::Display for VersionRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {})", self.minimum, self.maximum)
	}
}

#[derive(Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct RawVersionRange {
	minimum: DataVersion,
	maximum: DataVersion,
}

impl TryFrom<RawVersionRange> for VersionRange {
	type Error = anyhow::Error;

	fn try_from(raw: RawVersionRange) -> Result<Self> {
		VersionRange::new(raw.minimum, raw.maximum)
	}
}

impl From<VersionRange> for RawVersionRange {
	fn from(range: VersionRange) -> Self {
		RawVersionRange {
			minimum: range.minimum,
			maximum: range.maximum,
		}
	}
}
