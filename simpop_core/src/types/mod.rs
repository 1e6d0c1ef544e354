mod data_version;
pub use data_version::DataVersion;

mod dataset;
pub use dataset::{DATASETS, DatasetSchema, find_dataset};

mod version_range;
pub use version_range::{Compatibility, VersionRange};
