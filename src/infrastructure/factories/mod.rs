pub mod archive_adapter_factory;
pub use archive_adapter_factory::*;
