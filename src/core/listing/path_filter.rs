use crate::listing::SEPARATOR;
use crate::Entry;

/// Selects the entries visible at `segments`.
///
/// With no segments only top-level entries are returned. Otherwise an exact
/// file match wins; if several files share the name the first one is
/// returned. Failing that, the path is treated as a directory and its direct
/// children are returned. An empty result means the path does not exist.
pub fn filter_by_path(entries: &[Entry], segments: &[&str]) -> Vec<Entry> {
    if segments.is_empty() {
        return entries
            .iter()
            .filter(|e| !e.name.contains(SEPARATOR))
            .cloned()
            .collect();
    }

    let target = segments.join("/");
    if let Some(file) = entries.iter().find(|e| e.is_file() && e.name == target) {
        return vec![file.clone()];
    }

    entries
        .iter()
        .filter(|e| {
            let parts: Vec<&str> = e.name.split(SEPARATOR).collect();
            parts.len() == segments.len() + 1 && parts[..segments.len()] == *segments
        })
        .cloned()
        .collect()
}
