use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

use crate::member_path;
use crate::{ArchiveError, FileRecord, RemoteArchiveAdapter, ResourceKind};

type Members = BTreeMap<String, Vec<u8>>;

/// Archives held in memory, keyed by kind and resource id.
pub struct MemoryArchiveAdapter {
    archives: Arc<RwLock<HashMap<(ResourceKind, String), Members>>>,
}

impl MemoryArchiveAdapter {
    pub fn new() -> Self {
        Self {
            archives: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Adds or replaces a member, creating the resource if needed.
    pub async fn put_file(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        name: &str,
        data: Vec<u8>,
    ) {
        let mut archives = self.archives.write().await;
        archives
            .entry((kind, resource_id.to_string()))
            .or_default()
            .insert(name.to_string(), data);
    }

    pub async fn has_resource(&self, kind: ResourceKind, resource_id: &str) -> bool {
        let archives = self.archives.read().await;
        archives.contains_key(&(kind, resource_id.to_string()))
    }

    async fn members(&self, kind: ResourceKind, resource_id: &str) -> Result<Members, ArchiveError> {
        let archives = self.archives.read().await;
        archives
            .get(&(kind, resource_id.to_string()))
            .cloned()
            .ok_or_else(|| ArchiveError::NotFound(resource_id.to_string()))
    }
}

impl Default for MemoryArchiveAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteArchiveAdapter for MemoryArchiveAdapter {
    async fn list_files(
        &self,
        kind: ResourceKind,
        resource_id: &str,
    ) -> Result<Vec<FileRecord>, ArchiveError> {
        let members = self.members(kind, resource_id).await?;

        Ok(members
            .iter()
            .map(|(name, data)| FileRecord::new(name.clone(), data.len() as u64))
            .collect())
    }

    async fn download(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        file_name: Option<&str>,
        dest: &Path,
    ) -> Result<(), ArchiveError> {
        let mut members = self.members(kind, resource_id).await?;

        if let Some(name) = file_name {
            let data = members
                .remove(name)
                .ok_or_else(|| ArchiveError::NotFound(format!("{resource_id}/{name}")))?;
            members = BTreeMap::from([(name.to_string(), data)]);
        }

        for (name, data) in members {
            let path = member_path(dest, &name)?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&path, &data).await?;
            debug!("Wrote {}", path.display());
        }

        Ok(())
    }
}
