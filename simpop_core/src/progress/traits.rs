use super::ProgressOptions;

/// Handle of one running progress indicator.
///
/// Handles are shared across threads, so all methods take `&self`.
pub trait ProgressTrait: Send + Sync {
	/// Sets the absolute position. Clamped to the maximum value when one is known.
	fn set_position(&self, value: u64);

	/// Increases the position by `value`.
	fn inc(&self, value: u64);

	/// Updates the maximum value.
	fn set_max_value(&self, value: u64);

	/// Marks the task as complete.
	fn finish(&self);

	/// Ends the task at its current position, like `finish` without moving to the maximum.
	fn close(&self);

	/// Removes the indicator without reporting completion.
	fn remove(&self);
}

/// Strategy for displaying progress, chosen once per process and handed to every task that
/// reports progress.
pub trait ProgressReporter: Send + Sync {
	/// Starts a new indicator. Implementations return a no-op handle when `options.disable` is set.
	fn start(&self, options: &ProgressOptions) -> Box<dyn ProgressTrait>;
}
