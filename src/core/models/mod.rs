pub mod file_record;
pub use file_record::*;
pub mod entry;
pub use entry::*;
pub mod resource;
pub use resource::*;
pub mod bundle;
pub use bundle::*;
