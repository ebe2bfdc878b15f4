use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    ArchiveAdapterFactory, ArchiveDataset, ArchiveError, ArchiveFileSystem, DatasetResult,
    KaggleConfig, RemoteArchiveAdapter, ResourceKind, DEFAULT_PROTOCOL,
};

/// Main entry point of the crate.
///
/// `KaggleClient` builds the archive adapter described by its config once and
/// shares it with every filesystem and dataset it creates.
///
/// # Example
/// ```ignore
/// use kaggle_fs::{KaggleClient, KaggleConfig, LocalArchiveConfig, ResourceKind, SourceConfig};
///
/// let client = KaggleClient::new(KaggleConfig {
///     protocol: None,
///     kind: ResourceKind::Competition,
///     source: SourceConfig::Local(LocalArchiveConfig {
///         base_path: "./mirror".into(),
///     }),
/// })?;
///
/// let listing = client.file_system().ls("kaggle://titanic", true).await?;
/// ```
pub struct KaggleClient {
    pub config: KaggleConfig,
    pub archive: Arc<dyn RemoteArchiveAdapter>,
}

impl KaggleClient {
    pub fn new(config: KaggleConfig) -> Result<Self, ArchiveError> {
        let archive = ArchiveAdapterFactory::create(&config.source)?;

        Ok(Self { config, archive })
    }

    /// Wraps an already constructed adapter.
    pub fn with_adapter(config: KaggleConfig, archive: Arc<dyn RemoteArchiveAdapter>) -> Self {
        Self { config, archive }
    }

    pub fn file_system(&self) -> ArchiveFileSystem {
        let protocol = self.config.protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL);
        ArchiveFileSystem::with_protocol(self.archive.clone(), self.config.kind, protocol)
    }

    pub fn dataset(
        &self,
        resource_id: &str,
        directory: impl Into<PathBuf>,
        kind: ResourceKind,
        file_name: Option<String>,
    ) -> DatasetResult<ArchiveDataset> {
        ArchiveDataset::new(self.archive.clone(), resource_id, directory, kind, file_name)
    }

    pub async fn dispose(&self) {
        self.archive.dispose().await;
    }
}

#[cfg(test)]
mod client_tests {
    use super::*;
    use crate::{Listing, MemoryArchiveAdapter, SourceConfig};

    #[tokio::test]
    async fn file_system_and_dataset_share_adapter() {
        let archive = Arc::new(MemoryArchiveAdapter::new());
        archive
            .put_file(ResourceKind::Competition, "titanic", "train.csv", b"x".to_vec())
            .await;
        let client = KaggleClient::with_adapter(
            KaggleConfig {
                protocol: Some("kgl".to_string()),
                kind: ResourceKind::Competition,
                source: SourceConfig::Memory,
            },
            archive,
        );

        let listing = client.file_system().ls("kgl://titanic", false).await.unwrap();
        assert_eq!(listing, Listing::Names(vec!["train.csv".to_string()]));

        let dir = tempfile::tempdir().unwrap();
        let bundle = client
            .dataset("titanic", dir.path(), ResourceKind::Competition, None)
            .unwrap()
            .load()
            .await
            .unwrap();
        assert_eq!(bundle.members["train.csv"], b"x".to_vec());
    }

    #[tokio::test]
    async fn default_config_uses_kaggle_protocol() {
        let client = KaggleClient::new(KaggleConfig::default()).unwrap();

        assert_eq!(client.file_system().protocol(), "kaggle");
        client.dispose().await;
    }
}
