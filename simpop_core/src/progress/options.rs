/// Settings of a single progress indicator.
///
/// ```
/// use simpop_core::progress::ProgressOptions;
///
/// let outer = ProgressOptions::new("Processing files").position(0);
/// let inner = ProgressOptions::new("Rows").unit("row").position(1).leave(false);
/// assert_eq!(outer.unit, "it");
/// assert!(!inner.leave);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressOptions {
	/// Description shown before the indicator.
	pub message: String,
	/// Name of the counted items.
	pub unit: String,
	/// Keep the indicator visible once finished. Inner bars of nested loops usually set this to false.
	pub leave: bool,
	/// Line offset for nested bars; 0 is the outermost bar. Only terminal bars use it.
	pub position: Option<usize>,
	/// Number of expected items, if known.
	pub total: Option<u64>,
	pub disable: bool,
}

impl Default for ProgressOptions {
	fn default() -> Self {
		Self {
			message: String::new(),
			unit: "it".to_string(),
			leave: true,
			position: None,
			total: None,
			disable: false,
		}
	}
}

impl ProgressOptions {
	#[must_use]
	pub fn new(message: &str) -> Self {
		Self {
			message: message.to_string(),
			..Self::default()
		}
	}

	pub fn unit(mut self, unit: &str) -> Self {
		self.unit = unit.to_string();
		self
	}

	pub fn leave(mut self, leave: bool) -> Self {
		self.leave = leave;
		self
	}

	pub fn position(mut self, position: usize) -> Self {
		self.position = Some(position);
		self
	}

	pub fn total(mut self, total: u64) -> Self {
		self.total = Some(total);
		self
	}

	pub fn disable(mut self, disable: bool) -> Self {
		self.disable = disable;
		self
	}

	/// `"{message}: "`, or nothing for an empty message.
	pub(crate) fn prefix(&self) -> String {
		if self.message.is_empty() {
			String::new()
		} else {
			format!("{}: ", self.message)
		}
	}
}
