mod adapters;
pub mod infra_adapters {
    pub use super::adapters::*;
}

pub mod factories;
pub use factories::*;

pub mod client;
pub use client::*;
