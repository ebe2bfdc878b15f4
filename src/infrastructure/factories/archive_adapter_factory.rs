use std::sync::Arc;

use crate::{ArchiveError, MemoryArchiveAdapter, RemoteArchiveAdapter, SourceConfig};

#[cfg(feature = "local")]
use crate::LocalArchiveAdapter;

pub struct ArchiveAdapterFactory;

impl ArchiveAdapterFactory {
    pub fn create(config: &SourceConfig) -> Result<Arc<dyn RemoteArchiveAdapter>, ArchiveError> {
        match config {
            SourceConfig::Memory => Ok(Arc::new(MemoryArchiveAdapter::new())),
            #[cfg(feature = "local")]
            SourceConfig::Local(cfg) => Ok(Arc::new(LocalArchiveAdapter::new(cfg.clone()))),
            #[cfg(not(feature = "local"))]
            SourceConfig::Local(_) => {
                Err(ArchiveError::Other("local feature not enabled".to_string()))
            }
        }
    }
}
