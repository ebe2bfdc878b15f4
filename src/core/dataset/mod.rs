pub mod archive_dataset;
pub use archive_dataset::*;
