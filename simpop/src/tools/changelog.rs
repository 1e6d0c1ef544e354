use anyhow::Result;
use clap::Args;
use simpop_core::source::read_changelog_head;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// changelog file, usually CHANGELOG.rst at the root of a data source
	#[arg(required = true)]
	filename: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let entry = read_changelog_head(&arguments.filename)?;
	if entry.date.is_empty() {
		println!("{}", entry.version);
	} else {
		println!("{} ({})", entry.version, entry.date);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use assert_fs::{NamedTempFile, prelude::*};

	#[test]
	fn reads_version() {
		let file = NamedTempFile::new("CHANGELOG.rst").unwrap();
		file.write_str("**1.4.2 - some other date**\n\n**1.4.1 - some date**\n").unwrap();
		run_command(vec!["simpop", "changelog", file.path().to_str().unwrap()]).unwrap();
	}

	#[test]
	fn malformed_changelog() {
		let file = NamedTempFile::new("CHANGELOG.rst").unwrap();
		file.write_str("Changelog\n=========\n").unwrap();
		let err = run_command(vec!["simpop", "changelog", file.path().to_str().unwrap()])
			.unwrap_err()
			.to_string();
		assert!(err.contains("does not start with a heading"), "{err}");
	}
}
