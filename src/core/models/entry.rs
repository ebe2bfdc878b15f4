use serde::{Deserialize, Serialize};

use crate::FileRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

/// A synthesized listing record.
///
/// Files copy their size from the remote record. Directories carry the sum of
/// every descendant file, not only direct children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl Entry {
    pub fn file(record: &FileRecord) -> Self {
        Self {
            name: record.name.clone(),
            size: Some(record.size),
            entry_type: EntryType::File,
        }
    }

    pub fn directory(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
            entry_type: EntryType::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}
