use crate::error::{KanbanError, Result};
use std::path::{Path, PathBuf};

/// Where the board document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl StorageConfig {
    pub const DATA_FILE_ENV: &'static str = "KANBAN_DATA_FILE";
    const DEFAULT_DATA_FILE: &'static str = "data/kanban.json";

    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Reads `KANBAN_DATA_FILE`, falling back to the default location
    pub fn from_env() -> Result<Self> {
        match std::env::var(Self::DATA_FILE_ENV) {
            Ok(value) if value.trim().is_empty() => Err(KanbanError::ConfigError(format!(
                "{} is set but empty",
                Self::DATA_FILE_ENV
            ))),
            Ok(value) => Ok(Self::new(value)),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(KanbanError::ConfigError(format!(
                "{}: {}",
                Self::DATA_FILE_ENV,
                e
            ))),
        }
    }

    /// Resolves a relative data file against the project root
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        if self.data_file.is_relative() {
            self.data_file = root.as_ref().join(&self.data_file);
        }
        self
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DATA_FILE)
    }
}
