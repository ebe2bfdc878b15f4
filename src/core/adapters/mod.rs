pub mod archive_adapter;
pub use archive_adapter::*;
