use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

use crate::{member_path, ArchiveBundle, ArchiveError, RemoteArchiveAdapter, ResourceKind};

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource id must not be empty")]
    EmptyResourceId,

    #[error("Target directory does not exist: {}", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("File not found: {name}, available files are {available:?}")]
    FileNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Cannot save back to the remote archive")]
    ReadOnly,

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DatasetDescription {
    pub resource_id: String,
    pub directory: PathBuf,
    pub kind: ResourceKind,
    pub file_name: Option<String>,
}

/// Pipeline dataset that downloads a remote archive into a local directory
/// and loads its members into memory. Saving is not supported.
pub struct ArchiveDataset {
    archive: Arc<dyn RemoteArchiveAdapter>,
    resource_id: String,
    directory: PathBuf,
    kind: ResourceKind,
    file_name: Option<String>,
}

impl ArchiveDataset {
    /// Create a dataset for `resource_id`, downloading into `directory`.
    ///
    /// # Params
    /// - `file_name`: when set, only this member is downloaded and loaded
    ///
    /// Fails if `directory` does not exist.
    pub fn new(
        archive: Arc<dyn RemoteArchiveAdapter>,
        resource_id: impl Into<String>,
        directory: impl Into<PathBuf>,
        kind: ResourceKind,
        file_name: Option<String>,
    ) -> DatasetResult<Self> {
        let resource_id = resource_id.into();
        let directory = directory.into();

        if resource_id.trim().is_empty() {
            return Err(DatasetError::EmptyResourceId);
        }

        if !directory.is_dir() {
            return Err(DatasetError::DirectoryMissing(directory));
        }

        Ok(Self {
            archive,
            resource_id,
            directory,
            kind,
            file_name,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub async fn load(&self) -> DatasetResult<ArchiveBundle> {
        let members = self.list_members().await?;

        let wanted = match &self.file_name {
            Some(name) => {
                if !members.contains(name) {
                    return Err(DatasetError::FileNotFound {
                        name: name.clone(),
                        available: members,
                    });
                }
                vec![name.clone()]
            }
            None => members,
        };

        info!(
            "Downloading {} {} into {}",
            self.kind,
            self.resource_id,
            self.directory.display()
        );
        self.archive
            .download(
                self.kind,
                &self.resource_id,
                self.file_name.as_deref(),
                &self.directory,
            )
            .await?;

        let mut loaded = BTreeMap::new();
        for member in wanted {
            let bytes = fs::read(member_path(&self.directory, &member)?).await?;
            debug!("Loaded {} ({} bytes)", member, bytes.len());
            loaded.insert(member, bytes);
        }

        Ok(ArchiveBundle {
            resource_id: self.resource_id.clone(),
            members: loaded,
            is_competition: self.kind == ResourceKind::Competition,
            single_file: self.file_name.is_some(),
        })
    }

    pub async fn save(&self, _bundle: ArchiveBundle) -> DatasetResult<()> {
        Err(DatasetError::ReadOnly)
    }

    pub fn describe(&self) -> DatasetDescription {
        DatasetDescription {
            resource_id: self.resource_id.clone(),
            directory: self.directory.clone(),
            kind: self.kind,
            file_name: self.file_name.clone(),
        }
    }

    async fn list_members(&self) -> DatasetResult<Vec<String>> {
        Ok(self
            .archive
            .list_files(self.kind, &self.resource_id)
            .await?
            .into_iter()
            .map(|f| f.name)
            .collect())
    }
}
