pub mod config;
pub use config::*;

pub mod models;
pub use models::*;

pub mod listing;
pub use listing::*;

mod adapters;
pub mod core_adapters {
    pub use super::adapters::*;
}

pub mod fs;
pub use fs::*;

pub mod dataset;
pub use dataset::*;
