use crate::{domain::Board, error::Result};
use async_trait::async_trait;

pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Storage trait for persisting the board as a single document
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the persisted board. `Ok(None)` means nothing has been saved yet
    async fn try_load_board(&self) -> Result<Option<Board>>;

    /// Overwrites the persisted board
    async fn save_board(&self, board: &Board) -> Result<()>;

    /// Seed board handed out while nothing valid is persisted.
    ///
    /// Implementations return the same board for their whole lifetime so that
    /// ids read from a fallback board can be used in a later command.
    fn seed_board(&self) -> Board;

    /// Loads the board, falling back to seed data when the document is
    /// missing or unreadable
    async fn load_board(&self) -> Board {
        match self.try_load_board().await {
            Ok(Some(board)) => board,
            Ok(None) => {
                tracing::debug!("no persisted board, using seed data");
                self.seed_board()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load board, using seed data");
                self.seed_board()
            }
        }
    }

    /// Persists the seed board unless a readable board is already saved.
    ///
    /// A malformed document counts as absent and is replaced.
    async fn initialize(&self) -> Result<()> {
        match self.try_load_board().await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => self.save_board(&self.seed_board()).await,
            Err(e) => {
                tracing::warn!(error = %e, "replacing unreadable board with seed data");
                self.save_board(&self.seed_board()).await
            }
        }
    }

    /// Checks whether a document exists, valid or not
    async fn is_initialized(&self) -> bool;
}
