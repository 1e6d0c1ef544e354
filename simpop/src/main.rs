mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "validate")]
	/// Check that a data source is compatible with this version
	Check(tools::check::Subcommand),

	/// Show the data version recorded in a changelog
	Changelog(tools::changelog::Subcommand),

	/// Print the effective configuration as YAML
	Config(tools::config::Subcommand),

	/// List the known datasets
	Datasets(tools::datasets::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Check(arguments) => tools::check::run(arguments),
		Commands::Changelog(arguments) => tools::changelog::run(arguments),
		Commands::Config(arguments) => tools::config::run(arguments),
		Commands::Datasets(arguments) => tools::datasets::run(arguments),
	}
}
