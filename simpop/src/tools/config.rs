use anyhow::Result;
use clap::Args;
use simpop_core::config::Config;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// YAML configuration file, defaults are printed if omitted
	#[arg(long, short)]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = Config::from_optional_path(arguments.config.as_deref())?;
	print!("{}", config.to_yaml()?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn prints_defaults() {
		run_command(vec!["simpop", "config"]).unwrap();
	}

	#[test]
	fn missing_file() {
		let err = run_command(vec!["simpop", "config", "-c", "/does/not/exist.yml"])
			.unwrap_err()
			.to_string();
		assert_eq!(err, "Failed to open config file \"/does/not/exist.yml\"");
	}
}
