use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::{FileRecord, ResourceKind};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Remote service unavailable: {0}")]
    Unavailable(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Errors for adapter-specific cases
    #[error("Other error: {0}")]
    Other(String),
}

/// Access to a remote archive host (competitions and datasets).
///
/// Listings are complete snapshots; no pagination is modeled. Downloads place
/// already extracted files under `dest` at their relative member paths.
#[async_trait]
pub trait RemoteArchiveAdapter: Send + Sync {
    /// Lists every file of a resource
    async fn list_files(
        &self,
        kind: ResourceKind,
        resource_id: &str,
    ) -> Result<Vec<FileRecord>, ArchiveError>;

    /// Downloads the whole resource, or a single member when `file_name` is given
    async fn download(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        file_name: Option<&str>,
        dest: &Path,
    ) -> Result<(), ArchiveError>;

    /// Dispose resources if needed
    async fn dispose(&self) {}
}

/// Resolves where a member lands under `dest`, refusing names that would
/// escape it.
pub fn member_path(dest: &Path, member: &str) -> Result<std::path::PathBuf, ArchiveError> {
    let segments: Vec<&str> = member.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() || segments.iter().any(|s| *s == ".." || *s == ".") {
        return Err(ArchiveError::Other(format!("Invalid member path: {member}")));
    }

    Ok(segments.iter().fold(dest.to_path_buf(), |path, s| path.join(s)))
}
