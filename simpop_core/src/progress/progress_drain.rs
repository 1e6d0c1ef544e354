//! This module provides `ProgressDrain`, a no-op implementation of a progress indicator, and
//! `DrainReporter`, the reporter that hands out drains.
//!
//! # Overview
//!
//! A drain offers the same interface as a progress bar but does nothing when its methods are
//! called. It is used when progress display is disabled or when output would only be noise.
//!
//! # Examples
//!
//! ```rust
//! use simpop_core::progress::{DrainReporter, ProgressOptions, ProgressReporter};
//!
//! let progress = DrainReporter.start(&ProgressOptions::new("Processing").total(100));
//! progress.set_position(50);
//! progress.inc(10);
//! progress.finish();
//! ```

use super::{ProgressOptions, ProgressReporter, ProgressTrait};

/// A no-op progress indicator.
pub struct ProgressDrain;

impl ProgressTrait for ProgressDrain {
	fn set_position(&self, _value: u64) {}
	fn inc(&self, _value: u64) {}
	fn set_max_value(&self, _value: u64) {}
	fn finish(&self) {}
	fn close(&self) {}
	fn remove(&self) {}
}

/// Reporter that never displays anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct DrainReporter;

impl ProgressReporter for DrainReporter {
	fn start(&self, _options: &ProgressOptions) -> Box<dyn ProgressTrait> {
		Box::new(ProgressDrain)
	}
}
