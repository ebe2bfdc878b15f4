use std::collections::BTreeSet;

use crate::listing::SEPARATOR;
use crate::{Entry, FileRecord};

/// Builds a listing from flat file records, adding every directory the file
/// paths imply.
///
/// Files come first in input order, followed by directories sorted by name.
/// A directory's size is the sum of every file whose name starts with the
/// directory name, saturating at `u64::MAX`.
pub fn synthesize(files: &[FileRecord]) -> Vec<Entry> {
    let directories = implied_directories(files);

    let mut entries: Vec<Entry> = files.iter().map(Entry::file).collect();
    entries.reserve(directories.len());

    for dir in directories {
        let size = files
            .iter()
            .filter(|f| f.name.starts_with(dir.as_str()))
            .map(|f| f.size)
            .fold(0u64, u64::saturating_add);
        entries.push(Entry::directory(dir, size));
    }

    entries
}

/// Discovers directory names one depth level at a time until a level yields
/// nothing new.
fn implied_directories(files: &[FileRecord]) -> BTreeSet<String> {
    let max_depth = files
        .iter()
        .map(|f| f.name.split(SEPARATOR).count())
        .max()
        .unwrap_or(0);

    let mut directories = BTreeSet::new();

    for level in 1..max_depth {
        let found: Vec<String> = files
            .iter()
            .filter_map(|f| {
                let segments: Vec<&str> = f.name.split(SEPARATOR).collect();
                (segments.len() > level).then(|| segments[..level].join("/"))
            })
            .collect();

        if found.is_empty() {
            break;
        }

        directories.extend(found);
    }

    directories
}
