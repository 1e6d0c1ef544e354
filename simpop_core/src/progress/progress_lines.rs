//! Append-only progress output for notebooks and redirected output, where redrawing a line in
//! place is not possible.
//!
//! With a known total a line is written on start, whenever another 10 % are completed, and on
//! finish. Without a total the interval between lines doubles (1, 2, 4, 8, ... items).

use super::{
	ProgressOptions, ProgressReporter, ProgressTrait,
	format::{format_eta, percent},
	output::{Output, stderr_output, to_output, write_output},
	progress_drain::ProgressDrain,
};
use std::{
	io::Write,
	sync::{Arc, Mutex},
	time::Instant,
};

const STEP_PERCENT: u64 = 10;

struct Inner {
	options: ProgressOptions,
	len: Option<u64>,
	pos: u64,
	/// Percentage (known total) or position (unknown total) at which the next line is due.
	next_mark: u64,
	last_written: Option<u64>,
	start: Instant,
	finished: bool,
	output: Output,
}

impl Inner {
	fn status_line(&self) -> String {
		let prefix = self.options.prefix();
		let unit = &self.options.unit;
		match self.len {
			Some(len) => format!("{prefix}{}/{len} {unit} ({}%)\n", self.pos, percent(self.pos, len)),
			None => format!("{prefix}{} {unit}\n", self.pos),
		}
	}

	fn write_status(&mut self) {
		write_output(&self.output, &self.status_line());
		self.last_written = Some(self.pos);
	}

	/// Writes a line if the position passed the next mark.
	fn update(&mut self) {
		match self.len {
			Some(len) => {
				let pct = percent(self.pos, len);
				if pct >= self.next_mark {
					self.write_status();
					self.next_mark = (pct / STEP_PERCENT + 1) * STEP_PERCENT;
				}
			}
			None => {
				if self.pos >= self.next_mark {
					self.write_status();
					self.next_mark = self.pos.saturating_mul(2).max(1);
				}
			}
		}
	}

	fn end(&mut self) {
		self.finished = true;
		if self.last_written != Some(self.pos) {
			self.write_status();
		}
		if self.options.leave {
			let line = format!("{}done in {}\n", self.options.prefix(), format_eta(self.start.elapsed()));
			write_output(&self.output, &line);
		}
	}

	fn reset_marks(&mut self) {
		self.next_mark = match self.len {
			Some(len) => (percent(self.pos, len) / STEP_PERCENT + 1) * STEP_PERCENT,
			None => self.pos.saturating_mul(2).max(1),
		};
	}
}

/// A handle writing status lines, cloneable and thread-safe.
#[derive(Clone)]
pub struct ProgressLines {
	inner: Arc<Mutex<Inner>>,
}

impl ProgressLines {
	fn new(options: &ProgressOptions, output: Output) -> Self {
		let mut inner = Inner {
			options: options.clone(),
			len: options.total,
			pos: 0,
			next_mark: 0,
			last_written: None,
			start: Instant::now(),
			finished: false,
			output,
		};
		inner.write_status();
		inner.reset_marks();
		Self {
			inner: Arc::new(Mutex::new(inner)),
		}
	}

	fn update(&self, f: impl FnOnce(&mut Inner)) {
		if let Ok(mut inner) = self.inner.lock() {
			if inner.finished {
				return;
			}
			f(&mut *inner);
		}
	}
}

impl ProgressTrait for ProgressLines {
	fn set_position(&self, value: u64) {
		self.update(|inner| {
			inner.pos = inner.len.map_or(value, |len| value.min(len));
			inner.update();
		});
	}

	fn inc(&self, value: u64) {
		self.update(|inner| {
			let pos = inner.pos.saturating_add(value);
			inner.pos = inner.len.map_or(pos, |len| pos.min(len));
			inner.update();
		});
	}

	fn set_max_value(&self, value: u64) {
		self.update(|inner| {
			inner.len = Some(value);
			inner.pos = inner.pos.min(value);
			inner.reset_marks();
		});
	}

	/// Writes the final status unless it was just written, followed by a summary line if `leave` is set.
	fn finish(&self) {
		self.update(|inner| {
			if let Some(len) = inner.len {
				inner.pos = len;
			}
			inner.end();
		});
	}

	fn close(&self) {
		self.update(Inner::end);
	}

	fn remove(&self) {
		self.update(|inner| inner.finished = true);
	}
}

/// Reporter writing append-only status lines. `position` is ignored.
#[derive(Clone)]
pub struct LineReporter {
	output: Output,
}

impl Default for LineReporter {
	fn default() -> Self {
		Self {
			output: stderr_output(),
		}
	}
}

impl LineReporter {
	pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
		Self {
			output: to_output(writer),
		}
	}
}

impl ProgressReporter for LineReporter {
	fn start(&self, options: &ProgressOptions) -> Box<dyn ProgressTrait> {
		if options.disable {
			return Box::new(ProgressDrain);
		}
		Box::new(ProgressLines::new(options, self.output.clone()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::progress::SharedBuffer;
	use pretty_assertions::assert_eq;

	fn start(options: &ProgressOptions) -> (Box<dyn ProgressTrait>, SharedBuffer) {
		let buffer = SharedBuffer::default();
		let progress = LineReporter::with_writer(buffer.clone()).start(options);
		(progress, buffer)
	}

	fn lines(buffer: &SharedBuffer) -> Vec<String> {
		buffer.contents().lines().map(str::to_string).collect()
	}

	#[test]
	fn writes_one_line_per_ten_percent() {
		let (progress, buffer) = start(&ProgressOptions::new("Noising").unit("row").total(20));
		for _ in 0..20 {
			progress.inc(1);
		}
		progress.finish();

		let lines = lines(&buffer);
		assert_eq!(lines.len(), 12);
		assert_eq!(lines[0], "Noising: 0/20 row (0%)");
		assert_eq!(lines[1], "Noising: 2/20 row (10%)");
		assert_eq!(lines[10], "Noising: 20/20 row (100%)");
		assert!(lines[11].starts_with("Noising: done in "), "{}", lines[11]);
	}

	#[test]
	fn large_jumps_write_a_single_line() {
		let (progress, buffer) = start(&ProgressOptions::new("Files").total(100));
		progress.set_position(55);
		progress.set_position(58);
		progress.set_position(60);
		assert_eq!(
			lines(&buffer),
			vec!["Files: 0/100 it (0%)", "Files: 55/100 it (55%)", "Files: 60/100 it (60%)"]
		);
	}

	#[test]
	fn finish_writes_missing_final_status() {
		let (progress, buffer) = start(&ProgressOptions::new("Files").total(100).leave(false));
		progress.set_position(42);
		progress.finish();
		assert_eq!(
			lines(&buffer),
			vec!["Files: 0/100 it (0%)", "Files: 42/100 it (42%)", "Files: 100/100 it (100%)"]
		);
	}

	#[test]
	fn close_stops_at_current_position() {
		let (progress, buffer) = start(&ProgressOptions::new("Files").total(100));
		progress.set_position(42);
		progress.close();
		progress.inc(10);
		let lines = lines(&buffer);
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[1], "Files: 42/100 it (42%)");
		assert!(lines[2].starts_with("Files: done in "), "{}", lines[2]);
	}

	#[test]
	fn unknown_total_doubles_interval() {
		let (progress, buffer) = start(&ProgressOptions::default().leave(false));
		for _ in 0..10 {
			progress.inc(1);
		}
		progress.remove();
		progress.inc(100);
		assert_eq!(lines(&buffer), vec!["0 it", "1 it", "2 it", "4 it", "8 it"]);
	}

	#[test]
	fn set_max_value_recomputes_marks() {
		let (progress, buffer) = start(&ProgressOptions::new("Rows").leave(false));
		progress.set_max_value(10);
		progress.inc(1);
		progress.inc(1);
		assert_eq!(
			lines(&buffer),
			vec!["Rows: 0 it", "Rows: 1/10 it (10%)", "Rows: 2/10 it (20%)"]
		);
	}

	#[test]
	fn disabled_options_give_a_drain() {
		let (progress, buffer) = start(&ProgressOptions::new("Rows").total(3).disable(true));
		progress.inc(3);
		progress.finish();
		assert_eq!(buffer.contents(), "");
	}
}
