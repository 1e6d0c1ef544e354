//! Progress reporting for long running tasks.
//!
//! # Overview
//!
//! [`ProgressReporter`] is the strategy interface: it starts indicators ([`ProgressTrait`]
//! handles) configured by [`ProgressOptions`]. Three reporters are available:
//!
//! - [`TerminalReporter`] redraws a single-line bar on interactive terminals,
//! - [`LineReporter`] appends plain status lines, for notebooks and redirected output,
//! - [`DrainReporter`] displays nothing.
//!
//! [`select_reporter`] picks one from a [`ProgressMode`], probing the [`Environment`] once for
//! [`ProgressMode::Auto`]. The selected reporter is then passed to everything that reports
//! progress, instead of each call site checking the environment again.
//!
//! # Examples
//!
//! ```rust
//! use simpop_core::progress::*;
//!
//! let reporter = select_reporter(ProgressMode::Hidden);
//! let files = vec!["a.parquet", "b.parquet"];
//! for file in files.iter().progress(reporter.as_ref(), ProgressOptions::new("Processing files")) {
//!     let _ = file;
//! }
//! ```

mod environment;
mod format;
mod iter;
mod options;
mod output;
mod progress_bar;
mod progress_drain;
mod progress_lines;
mod traits;

pub use environment::{Environment, ProgressMode};
pub use iter::{ProgressIter, ProgressIterExt};
pub use options::ProgressOptions;
pub use output::SharedBuffer;
pub use progress_bar::{ProgressBar, TerminalReporter};
pub use progress_drain::{DrainReporter, ProgressDrain};
pub use progress_lines::{LineReporter, ProgressLines};
pub use traits::{ProgressReporter, ProgressTrait};

use std::sync::Arc;

/// Returns the reporter for `mode`. `Auto` is resolved by probing the current environment.
#[must_use]
pub fn select_reporter(mode: ProgressMode) -> Arc<dyn ProgressReporter> {
	let resolved = match mode {
		ProgressMode::Auto => mode.resolve(Environment::detect()),
		mode => mode,
	};
	reporter_for(resolved)
}

fn reporter_for(mode: ProgressMode) -> Arc<dyn ProgressReporter> {
	match mode {
		ProgressMode::Terminal => Arc::new(TerminalReporter::default()),
		ProgressMode::Lines => Arc::new(LineReporter::default()),
		ProgressMode::Auto | ProgressMode::Hidden => Arc::new(DrainReporter),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_mode_is_silent() {
		let reporter = select_reporter(ProgressMode::Hidden);
		let progress = reporter.start(&ProgressOptions::new("TestTask").total(100));
		progress.set_position(25);
		progress.inc(10);
		progress.finish();
	}

	#[test]
	fn auto_resolves_to_a_concrete_reporter() {
		// whatever the test runner's environment is, starting and finishing must not panic
		let reporter = select_reporter(ProgressMode::Auto);
		let progress = reporter.start(&ProgressOptions::new("OverflowTest").total(5).disable(true));
		progress.set_position(10);
		progress.inc(3);
		progress.finish();
	}

	#[test]
	fn reporters_share_one_interface() {
		let buffer = SharedBuffer::default();
		let reporters: Vec<Arc<dyn ProgressReporter>> = vec![
			Arc::new(TerminalReporter::with_writer(buffer.clone(), 60)),
			Arc::new(LineReporter::with_writer(buffer.clone())),
			Arc::new(DrainReporter),
		];
		for reporter in &reporters {
			let total: u64 = (1..=3u64)
				.progress(reporter.as_ref(), ProgressOptions::new("Shared").leave(false))
				.sum();
			assert_eq!(total, 6);
		}
		assert!(buffer.contents().contains("Shared: 3/3 it (100%)"));
	}
}
