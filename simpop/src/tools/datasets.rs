use anyhow::Result;
use clap::Args;
use simpop_core::types::DATASETS;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {}

pub fn run(_arguments: &Subcommand) -> Result<()> {
	let width = DATASETS.iter().map(|d| d.name.len()).max().unwrap_or(0);
	for dataset in &DATASETS {
		println!("{:width$}  {}", dataset.name, dataset.title);
	}
	Ok(())
}
