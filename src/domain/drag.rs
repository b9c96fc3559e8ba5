//! Transient drag-and-drop state owned by the interactive view.

use crate::domain::{card::CardId, column::ColumnId, operations::Command};

/// What is currently being dragged, if anything
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingCard {
        card_id: CardId,
        from_column: ColumnId,
    },
    DraggingColumn {
        column_id: ColumnId,
    },
}

impl DragState {
    /// Begins dragging a card, replacing any drag in progress
    pub fn start_card(&mut self, card_id: CardId, from_column: ColumnId) {
        *self = Self::DraggingCard {
            card_id,
            from_column,
        };
    }

    /// Begins dragging a column, replacing any drag in progress
    pub fn start_column(&mut self, column_id: ColumnId) {
        *self = Self::DraggingColumn { column_id };
    }

    /// Resolves a drop onto `target` and resets to idle.
    ///
    /// Returns the command to dispatch, or `None` when the drop lands on the
    /// column the drag started from (or nothing was being dragged).
    pub fn drop_on(&mut self, target: &ColumnId) -> Option<Command> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::DraggingCard {
                card_id,
                from_column,
            } => (&from_column != target).then(|| Command::MoveCard {
                card_id,
                from_column,
                to_column: target.clone(),
            }),
            Self::DraggingColumn { column_id } => {
                (&column_id != target).then(|| Command::ReorderColumn {
                    dragged: column_id,
                    target: target.clone(),
                })
            }
        }
    }

    /// Drag ended without a drop (cancelled, or dropped outside any column)
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_card(&self) -> bool {
        matches!(self, Self::DraggingCard { .. })
    }

    pub fn is_dragging_column(&self) -> bool {
        matches!(self, Self::DraggingColumn { .. })
    }

    pub fn is_card_dragged(&self, card: &CardId) -> bool {
        matches!(self, Self::DraggingCard { card_id, .. } if card_id == card)
    }

    pub fn is_column_dragged(&self, column: &ColumnId) -> bool {
        matches!(self, Self::DraggingColumn { column_id } if column_id == column)
    }

    /// A card drag is hovering over a column other than its origin
    pub fn is_card_drop_target(&self, column: &ColumnId) -> bool {
        matches!(self, Self::DraggingCard { from_column, .. } if from_column != column)
    }

    /// A column drag is hovering over a different column
    pub fn is_column_drop_target(&self, column: &ColumnId) -> bool {
        matches!(self, Self::DraggingColumn { column_id } if column_id != column)
    }
}
