use crate::progress::ProgressMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProgressConfig {
	/// How progress is displayed: `auto`, `terminal`, `lines` or `hidden`.
	#[serde(default)]
	pub mode: ProgressMode,
}
