#[cfg(feature = "local")]
pub mod local_adapter {
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use tokio::fs;
    use tracing::{debug, warn};

    use crate::member_path;
    use crate::{ArchiveError, FileRecord, LocalArchiveConfig, RemoteArchiveAdapter, ResourceKind};

    /// Serves archives from a local mirror directory.
    ///
    /// Layout:
    /// - `<base>/competitions/<id>/...`
    /// - `<base>/datasets/<owner>/<name>/...`
    pub struct LocalArchiveAdapter {
        config: LocalArchiveConfig,
    }

    impl LocalArchiveAdapter {
        pub fn new(config: LocalArchiveConfig) -> Self {
            Self { config }
        }

        fn resolve_resource_path(
            &self,
            kind: ResourceKind,
            resource_id: &str,
        ) -> Result<PathBuf, ArchiveError> {
            let family = match kind {
                ResourceKind::Competition => "competitions",
                ResourceKind::Dataset => "datasets",
            };

            member_path(&self.config.base_path.join(family), resource_id)
        }

        async fn existing_resource_path(
            &self,
            kind: ResourceKind,
            resource_id: &str,
        ) -> Result<PathBuf, ArchiveError> {
            let root = self.resolve_resource_path(kind, resource_id)?;

            match fs::metadata(&root).await {
                Ok(meta) if meta.is_dir() => Ok(root),
                _ => {
                    warn!("No local mirror for {} {}", kind, resource_id);
                    Err(ArchiveError::NotFound(resource_id.to_string()))
                }
            }
        }

        async fn walk(root: &Path) -> Result<Vec<FileRecord>, ArchiveError> {
            let mut files = Vec::new();
            let mut pending = vec![(root.to_path_buf(), String::new())];

            while let Some((dir, prefix)) = pending.pop() {
                let mut entries = fs::read_dir(&dir).await?;

                while let Some(entry) = entries.next_entry().await? {
                    let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                        warn!("Skipping non UTF-8 name in {}", dir.display());
                        continue;
                    };
                    let relative = format!("{prefix}{name}");
                    let file_type = entry.file_type().await?;

                    if file_type.is_dir() {
                        pending.push((entry.path(), format!("{relative}/")));
                    } else if file_type.is_file() {
                        let size = entry.metadata().await?.len();
                        files.push(FileRecord::new(relative, size));
                    }
                }
            }

            files.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(files)
        }
    }

    #[async_trait]
    impl RemoteArchiveAdapter for LocalArchiveAdapter {
        async fn list_files(
            &self,
            kind: ResourceKind,
            resource_id: &str,
        ) -> Result<Vec<FileRecord>, ArchiveError> {
            let root = self.existing_resource_path(kind, resource_id).await?;
            Self::walk(&root).await
        }

        async fn download(
            &self,
            kind: ResourceKind,
            resource_id: &str,
            file_name: Option<&str>,
            dest: &Path,
        ) -> Result<(), ArchiveError> {
            let root = self.existing_resource_path(kind, resource_id).await?;

            let members = match file_name {
                Some(name) => vec![name.to_string()],
                None => Self::walk(&root)
                    .await?
                    .into_iter()
                    .map(|f| f.name)
                    .collect(),
            };

            for member in members {
                let source = member_path(&root, &member)?;
                if !fs::metadata(&source).await.map(|m| m.is_file()).unwrap_or(false) {
                    return Err(ArchiveError::NotFound(format!("{resource_id}/{member}")));
                }

                let target = member_path(dest, &member)?;
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).await?;
                }
                fs::copy(&source, &target).await?;
                debug!("Copied {} to {}", source.display(), target.display());
            }

            Ok(())
        }
    }

}
