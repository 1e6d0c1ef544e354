//! Text helpers shared by the progress renderers.

use std::time::Duration;

/// Renders a bar of `width` cells with sub-character precision (7 partial block steps).
pub fn make_bar(pos: u64, len: u64, width: usize) -> String {
	let width = width.max(1);
	let frac = (pos as f64 / len.max(1) as f64).clamp(0.0, 1.0);
	let exact = frac * (width as f64);
	let whole = exact.floor() as usize;
	let rem = exact - whole as f64;

	// densest first; index 0 is never used for a partial cell
	let partials = ["█", "▉", "▊", "▋", "▌", "▍", "▎", "▏"];

	let mut s = String::with_capacity(width * 3);
	for _ in 0..whole.min(width) {
		s.push('█');
	}
	if whole < width {
		let idx = (rem * 8.0).floor() as usize;
		if idx > 0 {
			s.push_str(partials[8 - idx.min(7)]);
		} else {
			s.push(' ');
		}
		for _ in (whole + 1)..width {
			s.push(' ');
		}
	}
	s
}

pub fn format_rate(per_sec: f64, unit: &str) -> String {
	if per_sec.is_finite() {
		format!("{}{unit}/s", human_number(per_sec))
	} else {
		format!("--{unit}/s")
	}
}

const SCALES: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];

/// Shortens large numbers with a metric suffix, `12345` becomes `12.3k`.
pub fn human_number(v: f64) -> String {
	SCALES
		.iter()
		.find(|(scale, _)| v.abs() >= *scale)
		.map_or_else(|| format!("{v:.0}"), |(scale, suffix)| format!("{:.1}{suffix}", v / scale))
}

/// `45s`, `05:12`, `3:05:42` or `2d04h`, depending on the largest non-zero unit.
pub fn format_eta(d: Duration) -> String {
	let secs = d.as_secs();
	let (days, rest) = (secs / 86_400, secs % 86_400);
	let (hours, rest) = (rest / 3_600, rest % 3_600);
	let (minutes, seconds) = (rest / 60, rest % 60);

	match (days, hours, minutes) {
		(0, 0, 0) => format!("{seconds}s"),
		(0, 0, _) => format!("{minutes:02}:{seconds:02}"),
		(0, _, _) => format!("{hours}:{minutes:02}:{seconds:02}"),
		_ => format!("{days}d{hours:02}h"),
	}
}

/// Percentage of `pos` in `len`, rounded down. An empty task counts as complete.
pub fn percent(pos: u64, len: u64) -> u64 {
	if len == 0 {
		100
	} else {
		(u128::from(pos.min(len)) * 100 / u128::from(len)) as u64
	}
}

/// Items per second, zero before any time has passed.
pub fn rate(pos: u64, elapsed: Duration) -> f64 {
	let secs = elapsed.as_secs_f64();
	if secs > 0.0 { pos as f64 / secs } else { 0.0 }
}
