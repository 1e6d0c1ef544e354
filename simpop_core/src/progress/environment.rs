//! Runtime probe that decides how progress can be displayed.

use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Variables set inside Jupyter kernels (including the evcxr Rust kernel).
const NOTEBOOK_VARIABLES: [&str; 2] = ["EVCXR_IS_RUNTIME", "JPY_PARENT_PID"];

/// Where progress output ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
	/// stderr is an interactive terminal; lines can be redrawn in place.
	Terminal,
	/// Running inside a notebook kernel; output is appended to a cell.
	Notebook,
	/// stderr is redirected to a file or pipe.
	Captured,
}

impl Environment {
	#[must_use]
	pub fn detect() -> Self {
		let notebook = NOTEBOOK_VARIABLES.iter().any(|name| std::env::var_os(name).is_some());
		let environment = Self::classify(notebook, std::io::stderr().is_terminal());
		log::debug!("detected progress environment: {environment:?}");
		environment
	}

	/// A notebook hint wins over a terminal, since kernels may inherit a terminal's stderr.
	#[must_use]
	pub fn classify(notebook: bool, terminal: bool) -> Self {
		if notebook {
			Environment::Notebook
		} else if terminal {
			Environment::Terminal
		} else {
			Environment::Captured
		}
	}
}

/// Requested progress display.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
	/// Terminal bar on interactive terminals, plain lines elsewhere.
	#[default]
	Auto,
	/// Redrawn single-line bar.
	Terminal,
	/// Append-only status lines.
	Lines,
	/// No progress output.
	Hidden,
}

impl ProgressMode {
	/// Replaces `Auto` with the mode that suits `environment`.
	#[must_use]
	pub fn resolve(self, environment: Environment) -> Self {
		match self {
			ProgressMode::Auto => match environment {
				Environment::Terminal => ProgressMode::Terminal,
				Environment::Notebook | Environment::Captured => ProgressMode::Lines,
			},
			mode => mode,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(true, true, Environment::Notebook)]
	#[case(true, false, Environment::Notebook)]
	#[case(false, true, Environment::Terminal)]
	#[case(false, false, Environment::Captured)]
	fn classify(#[case] notebook: bool, #[case] terminal: bool, #[case] expected: Environment) {
		assert_eq!(Environment::classify(notebook, terminal), expected);
	}

	#[rstest]
	#[case(ProgressMode::Auto, Environment::Terminal, ProgressMode::Terminal)]
	#[case(ProgressMode::Auto, Environment::Notebook, ProgressMode::Lines)]
	#[case(ProgressMode::Auto, Environment::Captured, ProgressMode::Lines)]
	#[case(ProgressMode::Hidden, Environment::Terminal, ProgressMode::Hidden)]
	#[case(ProgressMode::Terminal, Environment::Captured, ProgressMode::Terminal)]
	#[case(ProgressMode::Lines, Environment::Terminal, ProgressMode::Lines)]
	fn resolve(#[case] mode: ProgressMode, #[case] environment: Environment, #[case] expected: ProgressMode) {
		assert_eq!(mode.resolve(environment), expected);
	}

	#[test]
	fn mode_names() {
		assert_eq!(serde_yaml_ng::to_string(&ProgressMode::Hidden).unwrap().trim(), "hidden");
		let mode: ProgressMode = serde_yaml_ng::from_str("lines").unwrap();
		assert_eq!(mode, ProgressMode::Lines);
	}
}
