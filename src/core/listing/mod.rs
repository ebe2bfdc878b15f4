pub mod synthesizer;
pub use synthesizer::*;
pub mod path_filter;
pub use path_filter::*;

pub const SEPARATOR: char = '/';

/// Splits a path into segments, ignoring empty ones.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}
