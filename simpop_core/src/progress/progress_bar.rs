//! Lightweight terminal progress bar.
//!
//! Features:
//! - message
//! - sub-character precision bar (7 partial block steps)
//! - pos/len with unit
//! - percentage
//! - speed (items/sec)
//! - ETA
//! - nested bars on separate lines (`position`)
//!
//! Without a known total only the counter, speed and elapsed time are shown.

use super::{
	ProgressOptions, ProgressReporter, ProgressTrait,
	format::{format_eta, format_rate, make_bar, percent, rate},
	output::{Output, stderr_output, to_output, write_output},
	progress_drain::ProgressDrain,
};
use std::{
	io::Write,
	sync::{Arc, Mutex},
	time::{Duration, Instant},
};

const REDRAW_INTERVAL: Duration = Duration::from_millis(100);
const MIN_BAR_WIDTH: usize = 10;

struct Inner {
	options: ProgressOptions,
	len: Option<u64>,
	pos: u64,
	start: Instant,
	last_draw: Option<Instant>,
	finished: bool,
	width: usize,
	output: Output,
}

impl Inner {
	fn redraw(&mut self, force: bool) {
		if !force && self.last_draw.is_some_and(|t| t.elapsed() < REDRAW_INTERVAL) {
			return;
		}
		self.last_draw = Some(Instant::now());
		let line = self.render(self.start.elapsed());
		self.write_line(&line);
	}

	fn render(&self, elapsed: Duration) -> String {
		let prefix = if self.options.message.is_empty() {
			String::new()
		} else {
			format!("{} ", self.options.message)
		};
		let unit = &self.options.unit;
		let per_sec = format_rate(rate(self.pos, elapsed), unit);

		let Some(len) = self.len else {
			return format!("{prefix}{} {unit} {per_sec} {}", self.pos, format_eta(elapsed));
		};

		let pos = self.pos.min(len);
		let eta_secs = if pos > 0 {
			elapsed.as_secs_f64() * ((len - pos) as f64 / pos as f64)
		} else {
			0.0
		};
		let pct = percent(pos, len);
		let eta = format_eta(Duration::try_from_secs_f64(eta_secs).unwrap_or(Duration::MAX));

		let get_line = |bar: &str| format!("{prefix}▕{bar}▏{pos}/{len} {unit} ({pct:>3}%) {per_sec:>5} {eta:>5}");

		let bar_width = self
			.width
			.saturating_sub(get_line("").chars().count())
			.max(MIN_BAR_WIDTH);
		get_line(&make_bar(pos, len, bar_width))
	}

	/// Writes the line on the row given by `position`, leaving the cursor on the first row.
	fn write_line(&self, line: &str) {
		match self.options.position.unwrap_or(0) {
			0 => write_output(&self.output, &format!("\r\x1b[2K{line}")),
			rows => write_output(
				&self.output,
				&format!("{}\r\x1b[2K{line}\x1b[{rows}A\r", "\n".repeat(rows)),
			),
		}
	}

	fn clear_line(&self) {
		self.write_line("");
	}

	fn end(&mut self) {
		self.finished = true;
		self.redraw(true);
		if !self.options.leave {
			self.clear_line();
		} else if self.options.position.unwrap_or(0) == 0 {
			write_output(&self.output, "\n");
		}
	}
}

/// A terminal progress bar handle, cloneable and thread-safe.
#[derive(Clone)]
pub struct ProgressBar {
	inner: Arc<Mutex<Inner>>,
}

impl ProgressBar {
	fn new(options: &ProgressOptions, width: usize, output: Output) -> ProgressBar {
		let mut inner = Inner {
			options: options.clone(),
			len: options.total,
			pos: 0,
			start: Instant::now(),
			last_draw: None,
			finished: false,
			width,
			output,
		};
		inner.redraw(true);
		ProgressBar {
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

impl ProgressTrait for ProgressBar {
	fn set_position(&self, value: u64) {
		self.update(|inner| {
			inner.pos = inner.len.map_or(value, |len| value.min(len));
			inner.redraw(false);
		});
	}

	fn inc(&self, value: u64) {
		self.update(|inner| {
			let pos = inner.pos.saturating_add(value);
			inner.pos = inner.len.map_or(pos, |len| pos.min(len));
			inner.redraw(false);
		});
	}

	fn set_max_value(&self, value: u64) {
		self.update(|inner| {
			inner.len = Some(value);
			inner.pos = inner.pos.min(value);
			inner.redraw(false);
		});
	}

	/// Sets the position to the maximum and, if `leave` is set, keeps the final line.
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
		self.update(|inner| {
			inner.finished = true;
			inner.clear_line();
		});
	}
}

/// Reporter drawing [`ProgressBar`]s on an interactive terminal.
#[derive(Clone)]
pub struct TerminalReporter {
	output: Output,
	width: Option<usize>,
}

impl Default for TerminalReporter {
	fn default() -> Self {
		Self {
			output: stderr_output(),
			width: None,
		}
	}
}

impl TerminalReporter {
	/// Renders into `writer` with a fixed line width instead of stderr and the terminal's width.
	pub fn with_writer<W: Write + Send + 'static>(writer: W, width: usize) -> Self {
		Self {
			output: to_output(writer),
			width: Some(width),
		}
	}
}

impl ProgressReporter for TerminalReporter {
	fn start(&self, options: &ProgressOptions) -> Box<dyn ProgressTrait> {
		if options.disable {
			return Box::new(ProgressDrain);
		}
		let width = self.width.unwrap_or_else(terminal_width);
		Box::new(ProgressBar::new(options, width, self.output.clone()))
	}
}

fn terminal_width() -> usize {
	if let Some((width, _)) = terminal_size::terminal_size() {
		return usize::from(width.0).max(MIN_BAR_WIDTH);
	}
	80
}
