use serde::{Deserialize, Serialize};

/// A file as reported by a remote archive listing.
///
/// `name` is the slash-delimited path of the file relative to the archive root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    #[serde(alias = "totalBytes")]
    pub size: u64,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}
