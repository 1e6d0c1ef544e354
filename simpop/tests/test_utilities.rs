#![allow(unused)]

use assert_cmd::{Command, cargo};
use assert_fs::{TempDir, prelude::*};

#[cfg(windows)]
pub const BINARY_NAME: &str = "simpop.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "simpop";

/// Helper to create a Command for the simpop binary.
pub fn simpop_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

pub struct CommandOutput {
	pub success: bool,
	pub code: i32,
	pub stdout: String,
	pub stderr: String,
}

/// Runs simpop with the given arguments and collects its output.
pub fn simpop_output(args: &[&str]) -> CommandOutput {
	let output = simpop_cmd().args(args).output().expect("failed to run simpop");
	CommandOutput {
		success: output.status.success(),
		code: output.status.code().unwrap_or(-1),
		stdout: String::from_utf8_lossy(&output.stdout).to_string(),
		stderr: String::from_utf8_lossy(&output.stderr).to_string(),
	}
}

/// Creates a data source with a changelog reporting `version` and directories for `datasets`.
pub fn data_source(version: Option<&str>, datasets: &[&str]) -> TempDir {
	let dir = TempDir::new().expect("failed to create temp dir");
	if let Some(version) = version {
		dir.child("CHANGELOG.rst")
			.write_str(&format!(
				"**{version} - some other date**\n\n - Did some other things\n\n**1.4.1 - some date**\n\n - Did some things\n"
			))
			.unwrap();
	}
	for dataset in datasets {
		dir.child(dataset).create_dir_all().unwrap();
	}
	dir
}

pub fn path_str(dir: &TempDir) -> String {
	dir.path().to_string_lossy().to_string()
}
