pub mod kaggle_config;
pub use kaggle_config::*;
