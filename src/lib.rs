pub mod core;
pub use crate::core::config::*;
pub use crate::core::core_adapters::*;
pub use crate::core::dataset::*;
pub use crate::core::fs::*;
pub use crate::core::listing;
pub use crate::core::listing::{filter_by_path, split_segments, synthesize};
pub use crate::core::models::*;

pub mod infrastructure;
pub use infrastructure::client::KaggleClient;
pub use infrastructure::factories::*;
pub use infrastructure::infra_adapters::*;
