use crate::{
    domain::Board,
    error::{KanbanError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process storage holding the serialized document in memory.
///
/// Useful for embedding the board in a UI session without touching disk, and
/// for tests. A read-only instance rejects every save.
pub struct MemoryStorage {
    document: RwLock<Option<String>>,
    read_only: bool,
    seed: Board,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
            read_only: false,
            seed: Board::seed(),
        }
    }

    /// Starts from an existing serialized document
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(document.into())),
            ..Self::new()
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Raw persisted document, if any
    pub async fn document(&self) -> Option<String> {
        self.document.read().await.clone()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn try_load_board(&self) -> Result<Option<Board>> {
        match self.document.read().await.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn save_board(&self, board: &Board) -> Result<()> {
        if self.read_only {
            return Err(KanbanError::StorageError(
                "memory storage is read-only".to_string(),
            ));
        }

        let json = serde_json::to_string(board)?;
        *self.document.write().await = Some(json);
        Ok(())
    }

    fn seed_board(&self) -> Board {
        self.seed.clone()
    }

    async fn is_initialized(&self) -> bool {
        self.document.read().await.is_some()
    }
}
