use std::collections::BTreeMap;

/// Contents of a loaded archive, keyed by member path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveBundle {
    pub resource_id: String,
    pub members: BTreeMap<String, Vec<u8>>,
    pub is_competition: bool,
    pub single_file: bool,
}
