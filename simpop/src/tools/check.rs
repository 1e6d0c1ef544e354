use anyhow::{Result, bail, ensure};
use clap::Args;
use colored::Colorize;
use simpop_core::{
	config::Config,
	progress::{ProgressMode, select_reporter},
	source::SourceValidator,
	types::{DATASETS, DatasetSchema, find_dataset},
};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// directory containing the simulated population data
	/// and its changelog
	#[arg(required = true, verbatim_doc_comment)]
	source: PathBuf,

	/// dataset to check, can be repeated
	/// checks every known dataset if omitted
	#[arg(long, short, value_parser = find_dataset, verbatim_doc_comment)]
	dataset: Vec<&'static DatasetSchema>,

	/// YAML configuration file
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// name of the changelog file in the source directory
	#[arg(long)]
	changelog: Option<String>,

	/// how to display progress
	#[arg(long, value_enum)]
	progress: Option<ProgressMode>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = Config::from_optional_path(arguments.config.as_deref())?;
	config.override_optional_changelog(&arguments.changelog);
	config.override_optional_progress_mode(&arguments.progress);

	let source = &arguments.source;
	ensure!(source.is_dir(), "source {source:?} is not a directory");

	let datasets: Vec<&DatasetSchema> = if arguments.dataset.is_empty() {
		DATASETS.iter().collect()
	} else {
		arguments.dataset.clone()
	};

	log::info!("checking {} dataset(s) in {source:?}", datasets.len());
	let reporter = select_reporter(config.progress.mode);
	let report = SourceValidator::new(&config).validate_all(source, datasets, reporter.as_ref());

	for (dataset, outcome) in report.outcomes() {
		match outcome {
			Ok(()) => println!("{}: {}", dataset.name, "ok".green()),
			Err(err) => {
				println!("{}: {}", dataset.name, "failed".red());
				for line in err.to_string().lines() {
					println!("  {line}");
				}
			}
		}
	}

	let failed = report.failures().count();
	if failed > 0 {
		bail!(
			"{failed} of {} dataset(s) in {source:?} cannot be read by simpop {}",
			report.len(),
			simpop_core::LIBRARY_VERSION
		);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use assert_fs::{TempDir, prelude::*};

	fn source(version: &str) -> TempDir {
		let dir = TempDir::new().unwrap();
		dir.child("CHANGELOG.rst")
			.write_str(&format!("**{version} - some date**\n\n - Did some things\n"))
			.unwrap();
		dir.child("decennial_census").create_dir_all().unwrap();
		dir
	}

	#[test]
	fn compatible_dataset() {
		let dir = source("1.4.2");
		let path = dir.path().to_str().unwrap();
		run_command(vec!["simpop", "check", "-q", "--progress", "hidden", "-d", "decennial_census", path]).unwrap();
	}

	#[test]
	fn newer_data() {
		let dir = source("1.4.3");
		let path = dir.path().to_str().unwrap();
		let err = run_command(vec!["simpop", "check", "--progress", "hidden", "-d", "decennial_census", path])
			.unwrap_err()
			.to_string();
		assert!(err.starts_with("1 of 1 dataset(s) in "), "{err}");
	}

	#[test]
	fn missing_datasets_fail() {
		let dir = source("1.4.2");
		let path = dir.path().to_str().unwrap();
		let err = run_command(vec!["simpop", "check", "--progress", "hidden", path])
			.unwrap_err()
			.to_string();
		assert!(err.starts_with("6 of 7 dataset(s) in "), "{err}");
	}

	#[test]
	fn unknown_dataset_is_a_usage_error() {
		let err = run_command(vec!["simpop", "check", "-d", "census", "."])
			.unwrap_err()
			.to_string();
		assert!(err.contains("unknown dataset \"census\""), "{err}");
	}

	#[test]
	fn source_must_be_a_directory() {
		let err = run_command(vec!["simpop", "check", "/does/not/exist"])
			.unwrap_err()
			.to_string();
		assert_eq!(err, "source \"/does/not/exist\" is not a directory");
	}
}
