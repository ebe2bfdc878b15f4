use serde::{Deserialize, Serialize};

/// Which family of remote archive a resource id points at.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Identified by a single segment, e.g. `titanic`
    #[default]
    Competition,
    /// Identified by `owner/name`
    Dataset,
}

impl ResourceKind {
    /// Number of leading path segments that make up a resource id.
    pub fn id_segments(&self) -> usize {
        match self {
            ResourceKind::Competition => 1,
            ResourceKind::Dataset => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Competition => "competition",
            ResourceKind::Dataset => "dataset",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
