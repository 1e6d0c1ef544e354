use super::SourceError;
use crate::types::DatasetSchema;
use std::path::{Path, PathBuf};

/// Outcome of validating several datasets of one source.
#[derive(Debug)]
pub struct ValidationReport {
	source: PathBuf,
	outcomes: Vec<(DatasetSchema, Result<(), SourceError>)>,
}

impl ValidationReport {
	#[must_use]
	pub fn new(source: &Path) -> Self {
		Self {
			source: source.to_path_buf(),
			outcomes: Vec::new(),
		}
	}

	pub fn push(&mut self, dataset: &DatasetSchema, outcome: Result<(), SourceError>) {
		if let Err(err) = &outcome {
			log::debug!("{dataset}: {err}");
		}
		self.outcomes.push((*dataset, outcome));
	}

	#[must_use]
	pub fn source(&self) -> &Path {
		&self.source
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}

	/// True if every dataset passed. An empty report counts as success.
	#[must_use]
	pub fn is_success(&self) -> bool {
		self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
	}

	pub fn outcomes(&self) -> impl Iterator<Item = (&DatasetSchema, Result<(), &SourceError>)> {
		self.outcomes.iter().map(|(dataset, outcome)| (dataset, outcome.as_ref().map(|_| ())))
	}

	pub fn successes(&self) -> impl Iterator<Item = &DatasetSchema> {
		self.outcomes.iter().filter(|(_, outcome)| outcome.is_ok()).map(|(dataset, _)| dataset)
	}

	pub fn failures(&self) -> impl Iterator<Item = (&DatasetSchema, &SourceError)> {
		self
			.outcomes
			.iter()
			.filter_map(|(dataset, outcome)| outcome.as_ref().err().map(|err| (dataset, err)))
	}
}
