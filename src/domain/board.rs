use crate::domain::{
    card::{Card, CardId},
    column::{Column, ColumnId},
};
use serde::{Deserialize, Serialize};

/// Kanban board state: columns in display order, left to right.
///
/// Serialized as a bare JSON array of columns, which is the whole persisted
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// The board used when nothing has been persisted yet
    pub fn seed() -> Self {
        Self::new(vec![
            Column::new("To Do").with_card(Card::new("Sample Task")),
            Column::new("In Progress"),
            Column::new("Done"),
        ])
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| &col.id == id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| &col.id == id)
    }

    /// Finds which column holds a card and the card's index within it
    pub fn find_card(&self, card_id: &CardId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(col_idx, col)| {
            col.card_position(card_id)
                .map(|card_idx| (col_idx, card_idx))
        })
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|col| col.cards.len()).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seed()
    }
}
