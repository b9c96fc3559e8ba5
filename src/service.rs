//! Command surface for the view layer.
//!
//! Each call reads the whole board, applies one command and writes the whole
//! board back when it changed. There is no locking between the read and the
//! write: two racing commands against the same storage lose one update.

use crate::{
    domain::{Board, CardId, ColumnId, Command, Outcome},
    error::Result,
    storage::Storage,
};

pub struct KanbanService<S: Storage> {
    storage: S,
}

impl<S: Storage> KanbanService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current board, or seed data when nothing readable is persisted
    pub async fn board(&self) -> Board {
        self.storage.load_board().await
    }

    /// Applies a command and persists the result if anything changed.
    ///
    /// Save failures are returned to the caller; nothing is retried.
    pub async fn execute(&self, command: Command) -> Result<Outcome> {
        let board = self.storage.load_board().await;
        let outcome = command.apply(&board);
        if let Outcome::Changed(next) = &outcome {
            self.storage.save_board(next).await?;
        }
        Ok(outcome)
    }

    /// Overwrites whatever is persisted with fresh seed data
    pub async fn reset(&self) -> Result<Board> {
        let board = Board::seed();
        self.storage.save_board(&board).await?;
        Ok(board)
    }

    pub async fn add_column(&self, title: impl Into<String>) -> Result<Outcome> {
        self.execute(Command::AddColumn {
            title: title.into(),
        })
        .await
    }

    pub async fn delete_column(&self, column_id: ColumnId) -> Result<Outcome> {
        self.execute(Command::DeleteColumn { column_id }).await
    }

    pub async fn rename_column(
        &self,
        column_id: ColumnId,
        title: impl Into<String>,
    ) -> Result<Outcome> {
        self.execute(Command::RenameColumn {
            column_id,
            title: title.into(),
        })
        .await
    }

    pub async fn add_card(&self, column_id: ColumnId, content: impl Into<String>) -> Result<Outcome> {
        self.execute(Command::AddCard {
            column_id,
            content: content.into(),
        })
        .await
    }

    pub async fn delete_card(&self, column_id: ColumnId, card_id: CardId) -> Result<Outcome> {
        self.execute(Command::DeleteCard { column_id, card_id })
            .await
    }

    pub async fn move_card(
        &self,
        card_id: CardId,
        from_column: ColumnId,
        to_column: ColumnId,
    ) -> Result<Outcome> {
        self.execute(Command::MoveCard {
            card_id,
            from_column,
            to_column,
        })
        .await
    }

    pub async fn reorder_column(&self, dragged: ColumnId, target: ColumnId) -> Result<Outcome> {
        self.execute(Command::ReorderColumn { dragged, target })
            .await
    }
}
