//! # Kanban Board
//!
//! Core logic for a single-board kanban application.
//!
//! The board is an ordered list of columns, each an ordered list of cards,
//! persisted as one JSON document. Mutations are pure transforms over the
//! board; the [`service::KanbanService`] wires them to a [`Storage`] backend
//! with a read-modify-write cycle per command.

pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use config::StorageConfig;
pub use domain::{
    board::Board,
    card::{Card, CardId},
    column::{Column, ColumnId},
    drag::DragState,
    operations::{Command, Outcome},
};
pub use error::{KanbanError, Result};
pub use service::KanbanService;
pub use storage::{FileStorage, MemoryStorage, Storage};
