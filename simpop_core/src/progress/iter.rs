use super::{ProgressOptions, ProgressReporter, ProgressTrait};

/// Iterator adapter advancing a progress indicator by one per item.
///
/// The position is increased when the next item is requested, so an item counts as done once the
/// loop body handling it has finished. The indicator is closed at the number of items seen when the
/// inner iterator is exhausted and removed if the adapter is dropped early.
pub struct ProgressIter<I> {
	inner: I,
	progress: Box<dyn ProgressTrait>,
	yielded: bool,
	done: bool,
}

impl<I: Iterator> Iterator for ProgressIter<I> {
	type Item = I::Item;

	fn next(&mut self) -> Option<I::Item> {
		if self.done {
			return None;
		}
		if self.yielded {
			self.progress.inc(1);
		}
		match self.inner.next() {
			Some(item) => {
				self.yielded = true;
				Some(item)
			}
			None => {
				self.done = true;
				self.progress.close();
				None
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done { (0, Some(0)) } else { self.inner.size_hint() }
	}
}

impl<I> Drop for ProgressIter<I> {
	fn drop(&mut self) {
		if !self.done {
			self.progress.remove();
		}
	}
}

pub trait ProgressIterExt: Iterator + Sized {
	/// Wraps the iterator with an indicator started by `reporter`.
	///
	/// If `options.total` is not set, it is taken from the iterator's size hint when that is exact.
	///
	/// ```
	/// use simpop_core::progress::{DrainReporter, ProgressIterExt, ProgressOptions};
	///
	/// let sum: u32 = (1..=4).progress(&DrainReporter, ProgressOptions::new("Summing")).sum();
	/// assert_eq!(sum, 10);
	/// ```
	fn progress(self, reporter: &dyn ProgressReporter, mut options: ProgressOptions) -> ProgressIter<Self> {
		if options.total.is_none()
			&& let (lower, Some(upper)) = self.size_hint()
			&& lower == upper
		{
			options.total = Some(upper as u64);
		}
		ProgressIter {
			progress: reporter.start(&options),
			inner: self,
			yielded: false,
			done: false,
		}
	}
}

impl<I: Iterator> ProgressIterExt for I {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::progress::{LineReporter, SharedBuffer};
	use pretty_assertions::assert_eq;

	fn capture() -> (LineReporter, SharedBuffer) {
		let buffer = SharedBuffer::default();
		(LineReporter::with_writer(buffer.clone()), buffer)
	}

	#[test]
	fn infers_total_from_exact_size() {
		let (reporter, buffer) = capture();
		let items: Vec<u32> = vec![1, 2, 3, 4, 5]
			.into_iter()
			.progress(&reporter, ProgressOptions::new("Items").leave(false))
			.collect();
		assert_eq!(items, vec![1, 2, 3, 4, 5]);

		let output = buffer.contents();
		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines.first(), Some(&"Items: 0/5 it (0%)"));
		assert_eq!(lines.last(), Some(&"Items: 5/5 it (100%)"));
	}

	#[test]
	fn explicit_total_wins() {
		let (reporter, buffer) = capture();
		let count = (0..3)
			.progress(&reporter, ProgressOptions::new("Items").total(6).leave(false))
			.count();
		assert_eq!(count, 3);
		assert!(buffer.contents().starts_with("Items: 0/6 it (0%)\n"));
	}

	#[test]
	fn short_iterator_ends_at_items_seen() {
		let (reporter, buffer) = capture();
		let count = (0..3)
			.progress(&reporter, ProgressOptions::new("Items").total(6).leave(false))
			.count();
		assert_eq!(count, 3);

		let output = buffer.contents();
		assert_eq!(output.lines().last(), Some("Items: 3/6 it (50%)"));
		assert!(!output.contains("6/6"), "{output}");
	}

	#[test]
	fn unknown_size_stays_open_ended() {
		let (reporter, buffer) = capture();
		let evens = (0..10)
			.filter(|n| n % 2 == 0)
			.progress(&reporter, ProgressOptions::new("Evens").leave(false))
			.count();
		assert_eq!(evens, 5);
		assert!(buffer.contents().starts_with("Evens: 0 it\n"));
	}

	#[test]
	fn counts_items_after_they_are_processed() {
		let (reporter, buffer) = capture();
		let mut iter = (0..10).progress(&reporter, ProgressOptions::new("Items"));
		iter.next();
		assert_eq!(buffer.contents(), "Items: 0/10 it (0%)\n");
		iter.next();
		assert!(buffer.contents().ends_with("Items: 1/10 it (10%)\n"));
	}

	#[test]
	fn early_drop_does_not_finish() {
		let (reporter, buffer) = capture();
		for n in (0..100).progress(&reporter, ProgressOptions::new("Items")) {
			if n == 49 {
				break;
			}
		}
		let output = buffer.contents();
		assert!(output.ends_with("Items: 40/100 it (40%)\n"), "{output}");
		assert!(!output.contains("done"));
	}

	#[test]
	fn exhausted_iterator_stays_exhausted() {
		let mut iter = std::iter::once(1).progress(&crate::progress::DrainReporter, ProgressOptions::default());
		assert_eq!(iter.next(), Some(1));
		assert_eq!(iter.next(), None);
		assert_eq!(iter.next(), None);
		assert_eq!(iter.size_hint(), (0, Some(0)));
	}
}
