pub mod memory_archive_adapter;
pub use memory_archive_adapter::*;

#[cfg(feature = "local")]
pub mod local_archive_adapter;
#[cfg(feature = "local")]
pub use local_archive_adapter::local_adapter::LocalArchiveAdapter;
