use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::listing::{filter_by_path, split_segments, synthesize};
use crate::{ArchiveError, Entry, RemoteArchiveAdapter, ResourceKind};

pub const DEFAULT_PROTOCOL: &str = "kaggle";

pub type FsResult<T> = std::result::Result<T, FsError>;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("Must specify {0} name")]
    EmptyPathSpec(ResourceKind),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Unavailable(#[from] ArchiveError),
}

/// Result of [`ArchiveFileSystem::ls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Detailed(Vec<Entry>),
    Names(Vec<String>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Listing::Detailed(entries) => entries.len(),
            Listing::Names(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            Listing::Detailed(entries) => entries.iter().map(|e| e.name.as_str()).collect(),
            Listing::Names(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Read-only filesystem view over the archives of one resource kind.
///
/// Paths look like `kaggle://<resource-id>/<member path>`. The resource id is
/// one segment for competitions and two (`owner/name`) for datasets. Entry
/// names are relative to the resource root.
pub struct ArchiveFileSystem {
    archive: Arc<dyn RemoteArchiveAdapter>,
    kind: ResourceKind,
    protocol: String,
}

struct ResolvedPath<'a> {
    resource_id: String,
    rest: Vec<&'a str>,
}

impl ArchiveFileSystem {
    pub fn new(archive: Arc<dyn RemoteArchiveAdapter>, kind: ResourceKind) -> Self {
        Self::with_protocol(archive, kind, DEFAULT_PROTOCOL)
    }

    pub fn with_protocol(
        archive: Arc<dyn RemoteArchiveAdapter>,
        kind: ResourceKind,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            archive,
            kind,
            protocol: protocol.into(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Removes a leading `<protocol>://` and surrounding slashes.
    pub fn strip_protocol<'a>(&self, path: &'a str) -> &'a str {
        let path = path
            .strip_prefix(self.protocol.as_str())
            .and_then(|p| p.strip_prefix("://"))
            .unwrap_or(path);

        path.trim_matches('/')
    }

    /// Lists the entries at `path`.
    ///
    /// A path naming a file lists that file alone. A path naming a directory
    /// lists its direct children. Nothing at the path is an error.
    ///
    /// `FsError::NotFound` only covers paths inside a listed resource.
    /// Adapter failures, including a resource the adapter does not know,
    /// arrive unchanged as `FsError::Unavailable(ArchiveError::NotFound(..))`.
    pub async fn ls(&self, path: &str, detail: bool) -> FsResult<Listing> {
        let resolved = self.resolve(path)?;
        let entries = self.entries(&resolved.resource_id).await?;

        let found = filter_by_path(&entries, &resolved.rest);
        if found.is_empty() {
            info!("Path not found: {}", path);
            return Err(FsError::NotFound(path.to_string()));
        }

        debug!("Listed {} entries at {}", found.len(), path);

        if detail {
            Ok(Listing::Detailed(found))
        } else {
            Ok(Listing::Names(found.into_iter().map(|e| e.name).collect()))
        }
    }

    /// Describes the path itself: a file, a directory, or the resource root.
    pub async fn info(&self, path: &str) -> FsResult<Entry> {
        let resolved = self.resolve(path)?;
        let entries = self.entries(&resolved.resource_id).await?;

        if resolved.rest.is_empty() {
            let size = entries
                .iter()
                .filter(|e| e.is_file())
                .filter_map(|e| e.size)
                .fold(0u64, u64::saturating_add);
            return Ok(Entry::directory("", size));
        }

        let target = resolved.rest.join("/");
        entries
            .iter()
            .find(|e| e.is_file() && e.name == target)
            .or_else(|| entries.iter().find(|e| e.name == target))
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_string()))
    }

    pub async fn exists(&self, path: &str) -> FsResult<bool> {
        match self.info(path).await {
            Ok(_) => Ok(true),
            Err(FsError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn size(&self, path: &str) -> FsResult<Option<u64>> {
        Ok(self.info(path).await?.size)
    }

    fn resolve<'a>(&self, path: &'a str) -> FsResult<ResolvedPath<'a>> {
        let segments = split_segments(self.strip_protocol(path));
        let id_len = self.kind.id_segments();

        if segments.len() < id_len {
            return Err(FsError::EmptyPathSpec(self.kind));
        }

        Ok(ResolvedPath {
            resource_id: segments[..id_len].join("/"),
            rest: segments[id_len..].to_vec(),
        })
    }

    async fn entries(&self, resource_id: &str) -> FsResult<Vec<Entry>> {
        let files = self.archive.list_files(self.kind, resource_id).await?;
        debug!("{} {} lists {} files", self.kind, resource_id, files.len());

        Ok(synthesize(&files))
    }
}

#[cfg(test)]
mod archive_file_system_tests {
    use super::*;
    use crate::MemoryArchiveAdapter;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    async fn competition_fs() -> ArchiveFileSystem {
        let archive = MemoryArchiveAdapter::new();
        archive
            .put_file(ResourceKind::Competition, "titanic", "a/b.txt", vec![0; 10])
            .await;
        archive
            .put_file(ResourceKind::Competition, "titanic", "a/c/d.txt", vec![0; 5])
            .await;
        archive
            .put_file(ResourceKind::Competition, "titanic", "train.csv", vec![0; 3])
            .await;

        ArchiveFileSystem::new(Arc::new(archive), ResourceKind::Competition)
    }

    struct OfflineArchive;

    #[async_trait]
    impl RemoteArchiveAdapter for OfflineArchive {
        async fn list_files(
            &self,
            _kind: ResourceKind,
            _resource_id: &str,
        ) -> Result<Vec<crate::FileRecord>, ArchiveError> {
            Err(ArchiveError::Unavailable("offline".to_string()))
        }

        async fn download(
            &self,
            _kind: ResourceKind,
            _resource_id: &str,
            _file_name: Option<&str>,
            _dest: &Path,
        ) -> Result<(), ArchiveError> {
            Err(ArchiveError::Unavailable("offline".to_string()))
        }
    }

    struct EmptyArchive;

    #[async_trait]
    impl RemoteArchiveAdapter for EmptyArchive {
        async fn list_files(
            &self,
            _kind: ResourceKind,
            _resource_id: &str,
        ) -> Result<Vec<crate::FileRecord>, ArchiveError> {
            Ok(vec![])
        }

        async fn download(
            &self,
            _kind: ResourceKind,
            _resource_id: &str,
            _file_name: Option<&str>,
            _dest: &Path,
        ) -> Result<(), ArchiveError> {
            Ok(())
        }
    }

    #[test]
    fn strips_protocol_and_slashes() {
        let fs = ArchiveFileSystem::new(Arc::new(OfflineArchive), ResourceKind::Competition);

        assert_eq!(fs.strip_protocol("kaggle://titanic/a/"), "titanic/a");
        assert_eq!(fs.strip_protocol("/titanic"), "titanic");
        assert_eq!(fs.strip_protocol("other://titanic"), "other://titanic");
    }

    #[tokio::test]
    async fn lists_resource_root() {
        let fs = competition_fs().await;

        let listing = fs.ls("kaggle://titanic", true).await.unwrap();

        let mut names = listing.names();
        names.sort();
        assert_eq!(names, vec!["a", "train.csv"]);
    }

    #[tokio::test]
    async fn lists_directory_children_with_details() {
        let fs = competition_fs().await;

        let listing = fs.ls("titanic/a", true).await.unwrap();

        let Listing::Detailed(mut entries) = listing else {
            panic!("Expected detailed listing");
        };
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            entries,
            vec![
                Entry::file(&crate::FileRecord::new("a/b.txt", 10)),
                Entry::directory("a/c", 5),
            ]
        );
    }

    #[tokio::test]
    async fn lists_single_file_by_name() {
        let fs = competition_fs().await;

        let listing = fs.ls("kaggle://titanic/a/c/d.txt", false).await.unwrap();

        assert_eq!(listing, Listing::Names(vec!["a/c/d.txt".to_string()]));
    }

    #[tokio::test]
    async fn missing_path_is_not_found() {
        let fs = competition_fs().await;

        match fs.ls("titanic/nope", true).await {
            Err(FsError::NotFound(p)) => assert_eq!(p, "titanic/nope"),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_resource_root_is_not_found() {
        let fs = ArchiveFileSystem::new(Arc::new(EmptyArchive), ResourceKind::Competition);

        assert!(matches!(
            fs.ls("titanic", true).await,
            Err(FsError::NotFound(p)) if p == "titanic"
        ));
    }

    #[tokio::test]
    async fn unknown_resource_surfaces_adapter_not_found() {
        let fs = competition_fs().await;

        assert!(matches!(
            fs.ls("house-prices", true).await,
            Err(FsError::Unavailable(ArchiveError::NotFound(id))) if id == "house-prices"
        ));
    }

    #[tokio::test]
    async fn missing_resource_id_fails_before_listing() {
        let fs = ArchiveFileSystem::new(Arc::new(OfflineArchive), ResourceKind::Competition);

        assert!(matches!(
            fs.ls("kaggle://", true).await,
            Err(FsError::EmptyPathSpec(ResourceKind::Competition))
        ));
    }

    #[tokio::test]
    async fn dataset_ids_take_two_segments() {
        let archive = MemoryArchiveAdapter::new();
        archive
            .put_file(ResourceKind::Dataset, "owner/prices", "2020/jan.csv", vec![1, 2])
            .await;
        let fs = ArchiveFileSystem::new(Arc::new(archive), ResourceKind::Dataset);

        assert!(matches!(
            fs.ls("kaggle://owner", true).await,
            Err(FsError::EmptyPathSpec(ResourceKind::Dataset))
        ));
        assert_eq!(
            fs.ls("kaggle://owner/prices/2020", false).await.unwrap(),
            Listing::Names(vec!["2020/jan.csv".to_string()])
        );
    }

    #[tokio::test]
    async fn remote_failure_propagates_as_unavailable() {
        let fs = ArchiveFileSystem::new(Arc::new(OfflineArchive), ResourceKind::Competition);

        assert!(matches!(
            fs.ls("titanic", true).await,
            Err(FsError::Unavailable(ArchiveError::Unavailable(_)))
        ));
        assert!(fs.exists("titanic").await.is_err());
    }

    #[tokio::test]
    async fn info_keeps_files_as_files() {
        let fs = competition_fs().await;

        let file = fs.info("titanic/a/b.txt").await.unwrap();
        let dir = fs.info("titanic/a").await.unwrap();
        let root = fs.info("titanic").await.unwrap();

        assert!(file.is_file());
        assert_eq!(file.size, Some(10));
        assert_eq!(dir, Entry::directory("a", 15));
        assert_eq!(root.size, Some(18));
        assert!(root.is_dir());
    }

    #[tokio::test]
    async fn exists_and_size() {
        let fs = competition_fs().await;

        assert!(fs.exists("titanic/train.csv").await.unwrap());
        assert!(!fs.exists("titanic/test.csv").await.unwrap());
        assert_eq!(fs.size("titanic/a/c").await.unwrap(), Some(5));
    }
}
