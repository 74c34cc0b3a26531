use super::{MenuPayload, MenuSource, MenuSourceError};
use crate::menu::MenuRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a YAML or JSON record batch from disk on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMenuSource {
    path: PathBuf,
}

impl FileMenuSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuSource for FileMenuSource {
    fn fetch_menu_records(&self) -> Result<Vec<MenuRecord>, MenuSourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| MenuSourceError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str::<MenuPayload>(&raw)
            .map(MenuPayload::into_records)
            .map_err(|e| MenuSourceError::Decode {
                origin: self.path.display().to_string(),
                reason: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
