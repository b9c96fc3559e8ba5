use crate::{config::StorageConfig, domain::Board, error::Result, storage::Storage};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Stores the board as one pretty-printed JSON file.
///
/// Writes overwrite the file in place; there is no atomic rename and no
/// locking, so concurrent writers race and the last save wins.
pub struct FileStorage {
    data_file: PathBuf,
    seed: Board,
}

impl FileStorage {
    /// Creates a storage backed by the default data file under the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self::from_config(&StorageConfig::default().with_root(project_root))
    }

    /// Creates a storage backed by an explicit file path
    pub fn at(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            seed: Board::seed(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::at(config.data_file.clone())
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            tracing::info!(path = %path.display(), "creating data directory");
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn try_load_board(&self) -> Result<Option<Board>> {
        if !self.data_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.data_file).await?;
        let board: Board = serde_json::from_str(&contents)?;

        Ok(Some(board))
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            self.ensure_directory_exists(parent).await?;
        }

        let json = serde_json::to_string_pretty(board)?;
        fs::write(&self.data_file, json).await?;
        tracing::debug!(
            path = %self.data_file.display(),
            columns = board.columns.len(),
            "saved board"
        );

        Ok(())
    }

    fn seed_board(&self) -> Board {
        self.seed.clone()
    }

    async fn is_initialized(&self) -> bool {
        self.data_file.exists()
    }
}
