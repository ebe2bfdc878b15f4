pub mod archive_file_system;
pub use archive_file_system::*;
