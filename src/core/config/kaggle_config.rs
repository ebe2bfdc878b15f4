use std::path::PathBuf;

use crate::ResourceKind;

#[derive(Debug, Clone)]
pub struct LocalArchiveConfig {
    /// Mirror root holding `competitions/<id>/...` and `datasets/<owner>/<name>/...`
    pub base_path: PathBuf,
}

#[derive(Debug, Clone)]
pub enum SourceConfig {
    Memory,
    Local(LocalArchiveConfig),
}

#[derive(Debug, Clone)]
pub struct KaggleConfig {
    /// Protocol prefix stripped from filesystem paths. Default: `kaggle`
    pub protocol: Option<String>,
    /// Resource kind served by filesystems built from this config
    pub kind: ResourceKind,
    pub source: SourceConfig,
}

impl Default for KaggleConfig {
    fn default() -> Self {
        Self {
            protocol: None,
            kind: ResourceKind::Competition,
            source: SourceConfig::Memory,
        }
    }
}
