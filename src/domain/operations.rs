//! Board mutations.
//!
//! Every mutation is a total function of the current board: arguments that
//! name unknown ids, or titles/content that are blank after trimming, leave
//! the board untouched instead of failing. Persistence is the caller's job.

use crate::domain::{
    board::Board,
    card::{Card, CardId},
    column::{Column, ColumnId},
};
use serde::{Deserialize, Serialize};

/// A single user command against the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddColumn {
        title: String,
    },
    DeleteColumn {
        column_id: ColumnId,
    },
    RenameColumn {
        column_id: ColumnId,
        title: String,
    },
    AddCard {
        column_id: ColumnId,
        content: String,
    },
    DeleteCard {
        column_id: ColumnId,
        card_id: CardId,
    },
    MoveCard {
        card_id: CardId,
        from_column: ColumnId,
        to_column: ColumnId,
    },
    ReorderColumn {
        dragged: ColumnId,
        target: ColumnId,
    },
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed(Board),
    Unchanged,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// The next board, falling back to `current` when nothing changed
    pub fn into_board(self, current: &Board) -> Board {
        match self {
            Self::Changed(board) => board,
            Self::Unchanged => current.clone(),
        }
    }
}

impl Command {
    /// Applies the command to a copy of `board`
    pub fn apply(&self, board: &Board) -> Outcome {
        let mut next = board.clone();
        if self.apply_in_place(&mut next) {
            tracing::debug!(command = ?self, "applied board command");
            Outcome::Changed(next)
        } else {
            tracing::debug!(command = ?self, "board command was a no-op");
            Outcome::Unchanged
        }
    }

    fn apply_in_place(&self, board: &mut Board) -> bool {
        match self {
            Self::AddColumn { title } => {
                if title.trim().is_empty() {
                    return false;
                }
                board.columns.push(Column::new(title.clone()));
                true
            }
            Self::DeleteColumn { column_id } => match board.column_index(column_id) {
                Some(idx) => {
                    board.columns.remove(idx);
                    true
                }
                None => false,
            },
            Self::RenameColumn { column_id, title } => match board.column_mut(column_id) {
                Some(col) if &col.title != title => {
                    col.title = title.clone();
                    true
                }
                _ => false,
            },
            Self::AddCard { column_id, content } => {
                if content.trim().is_empty() {
                    return false;
                }
                match board.column_mut(column_id) {
                    Some(col) => {
                        col.cards.push(Card::new(content.clone()));
                        true
                    }
                    None => false,
                }
            }
            Self::DeleteCard { column_id, card_id } => {
                let Some(col) = board.column_mut(column_id) else {
                    return false;
                };
                match col.card_position(card_id) {
                    Some(pos) => {
                        col.cards.remove(pos);
                        true
                    }
                    None => false,
                }
            }
            Self::MoveCard {
                card_id,
                from_column,
                to_column,
            } => {
                let (Some(from_idx), Some(to_idx)) =
                    (board.column_index(from_column), board.column_index(to_column))
                else {
                    return false;
                };
                let Some(pos) = board.columns[from_idx].card_position(card_id) else {
                    return false;
                };
                if from_idx == to_idx && pos + 1 == board.columns[from_idx].cards.len() {
                    // already at the tail
                    return false;
                }
                let card = board.columns[from_idx].cards.remove(pos);
                board.columns[to_idx].cards.push(card);
                true
            }
            Self::ReorderColumn { dragged, target } => {
                if dragged == target {
                    return false;
                }
                let (Some(from_idx), Some(to_idx)) =
                    (board.column_index(dragged), board.column_index(target))
                else {
                    return false;
                };
                let column = board.columns.remove(from_idx);
                board.columns.insert(to_idx, column);
                true
            }
        }
    }
}

/// Appends a new empty column; blank titles are ignored
pub fn add_column(board: &Board, title: &str) -> Board {
    Command::AddColumn {
        title: title.to_string(),
    }
    .apply(board)
    .into_board(board)
}

pub fn delete_column(board: &Board, column_id: &ColumnId) -> Board {
    Command::DeleteColumn {
        column_id: column_id.clone(),
    }
    .apply(board)
    .into_board(board)
}

pub fn rename_column(board: &Board, column_id: &ColumnId, title: &str) -> Board {
    Command::RenameColumn {
        column_id: column_id.clone(),
        title: title.to_string(),
    }
    .apply(board)
    .into_board(board)
}

/// Appends a new card to a column; blank content is ignored
pub fn add_card(board: &Board, column_id: &ColumnId, content: &str) -> Board {
    Command::AddCard {
        column_id: column_id.clone(),
        content: content.to_string(),
    }
    .apply(board)
    .into_board(board)
}

pub fn delete_card(board: &Board, column_id: &ColumnId, card_id: &CardId) -> Board {
    Command::DeleteCard {
        column_id: column_id.clone(),
        card_id: card_id.clone(),
    }
    .apply(board)
    .into_board(board)
}

/// Removes a card from `from_column` and appends it to the end of `to_column`.
///
/// When both ids name the same column the card is relocated to that column's
/// tail. If the card is not in `from_column`, or `to_column` does not exist,
/// the board is returned unchanged.
pub fn move_card(
    board: &Board,
    card_id: &CardId,
    from_column: &ColumnId,
    to_column: &ColumnId,
) -> Board {
    Command::MoveCard {
        card_id: card_id.clone(),
        from_column: from_column.clone(),
        to_column: to_column.clone(),
    }
    .apply(board)
    .into_board(board)
}

/// Splices `dragged` out of the column list and reinserts it at the index
/// `target` held before the removal.
pub fn reorder_column(board: &Board, dragged: &ColumnId, target: &ColumnId) -> Board {
    Command::ReorderColumn {
        dragged: dragged.clone(),
        target: target.clone(),
    }
    .apply(board)
    .into_board(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &Board) -> Vec<ColumnId> {
        board.columns.iter().map(|c| c.id.clone()).collect()
    }

    fn five_columns() -> Board {
        Board::new(
            ["A", "B", "C", "D", "E"]
                .iter()
                .map(|t| Column {
                    id: ColumnId::from(*t),
                    title: t.to_string(),
                    cards: vec![Card::new(format!("card in {t}"))],
                })
                .collect(),
        )
    }

    #[test]
    fn test_add_column_appends() {
        let board = Board::seed();
        let next = add_column(&board, "Review");

        assert_eq!(next.columns.len(), 4);
        assert_eq!(&next.columns[..3], &board.columns[..]);
        let added = &next.columns[3];
        assert_eq!(added.title, "Review");
        assert!(added.cards.is_empty());
        assert!(board.column(&added.id).is_none());
    }

    #[test]
    fn test_add_column_blank_title_is_noop() {
        let board = Board::seed();
        assert_eq!(add_column(&board, ""), board);
        assert_eq!(add_column(&board, "   "), board);
        assert_eq!(
            Command::AddColumn {
                title: "\t".to_string()
            }
            .apply(&board),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_delete_column() {
        let board = Board::seed();
        let in_progress = board.columns[1].id.clone();

        let next = delete_column(&board, &in_progress);
        assert_eq!(next.columns.len(), 2);
        assert_eq!(next.columns[0], board.columns[0]);
        assert_eq!(next.columns[1], board.columns[2]);
    }

    #[test]
    fn test_delete_missing_column_is_noop() {
        let board = Board::seed();
        assert_eq!(delete_column(&board, &ColumnId::from("missing")), board);
    }

    #[test]
    fn test_rename_column() {
        let board = Board::seed();
        let id = board.columns[2].id.clone();

        let next = rename_column(&board, &id, "Shipped");
        assert_eq!(next.columns[2].title, "Shipped");
        assert_eq!(next.columns[2].id, id);
        assert_eq!(rename_column(&board, &ColumnId::from("missing"), "x"), board);
    }

    #[test]
    fn test_add_card_appends_to_column() {
        let board = Board::seed();
        let todo = board.columns[0].id.clone();

        let next = add_card(&board, &todo, "Write spec");
        let cards = &next.columns[0].cards;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], board.columns[0].cards[0]);
        assert_eq!(cards[1].content, "Write spec");
    }

    #[test]
    fn test_add_card_noops() {
        let board = Board::seed();
        let todo = board.columns[0].id.clone();

        assert_eq!(add_card(&board, &todo, "  "), board);
        assert_eq!(add_card(&board, &ColumnId::from("missing"), "task"), board);
    }

    #[test]
    fn test_delete_card() {
        let board = Board::seed();
        let todo = board.columns[0].id.clone();
        let card = board.columns[0].cards[0].id.clone();

        let next = delete_card(&board, &todo, &card);
        assert!(next.columns[0].cards.is_empty());

        // card exists, but not in the named column
        let done = board.columns[2].id.clone();
        assert_eq!(delete_card(&board, &done, &card), board);
        assert_eq!(delete_card(&board, &todo, &CardId::from("missing")), board);
    }

    #[test]
    fn test_move_card_between_columns() {
        let board = five_columns();
        let card = board.columns[0].cards[0].clone();
        let (a, c) = (ColumnId::from("A"), ColumnId::from("C"));

        let next = move_card(&board, &card.id, &a, &c);
        assert!(next.columns[0].cards.is_empty());
        assert_eq!(next.columns[2].cards.len(), 2);
        assert_eq!(next.columns[2].cards.last(), Some(&card));
        assert_eq!(next.card_count(), board.card_count());
        assert_eq!(next.find_card(&card.id), Some((2, 1)));
    }

    #[test]
    fn test_move_card_within_same_column_goes_to_tail() {
        let board = Board::seed();
        let todo = board.columns[0].id.clone();
        let board = add_card(&board, &todo, "second");
        let first = board.columns[0].cards[0].clone();

        let next = move_card(&board, &first.id, &todo, &todo);
        assert_eq!(next.columns[0].cards.len(), 2);
        assert_eq!(next.columns[0].cards[1], first);
    }

    #[test]
    fn test_move_last_card_within_its_column_is_unchanged() {
        let board = Board::seed();
        let todo = board.columns[0].id.clone();
        let board = add_card(&board, &todo, "second");
        let last = board.columns[0].cards[1].id.clone();

        let outcome = Command::MoveCard {
            card_id: last,
            from_column: todo.clone(),
            to_column: todo,
        }
        .apply(&board);
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_rename_to_same_title_is_unchanged() {
        let board = Board::seed();
        let outcome = Command::RenameColumn {
            column_id: board.columns[0].id.clone(),
            title: "To Do".to_string(),
        }
        .apply(&board);
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_move_card_noops() {
        let board = five_columns();
        let card = board.columns[0].cards[0].id.clone();
        let (a, b) = (ColumnId::from("A"), ColumnId::from("B"));

        assert_eq!(move_card(&board, &CardId::from("missing"), &a, &b), board);
        // card lives in A, not B
        assert_eq!(move_card(&board, &card, &b, &a), board);
        // unknown destination must not lose the card
        assert_eq!(move_card(&board, &card, &a, &ColumnId::from("missing")), board);
    }

    #[test]
    fn test_reorder_column_forward() {
        let board = five_columns();
        let next = reorder_column(&board, &ColumnId::from("B"), &ColumnId::from("D"));

        let order: Vec<&str> = next.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "D", "B", "E"]);
        assert_eq!(next.column_index(&ColumnId::from("B")), Some(3));
    }

    #[test]
    fn test_reorder_column_backward() {
        let board = five_columns();
        let next = reorder_column(&board, &ColumnId::from("E"), &ColumnId::from("B"));

        let order: Vec<&str> = next.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["A", "E", "B", "C", "D"]);
    }

    #[test]
    fn test_reorder_preserves_columns() {
        let board = five_columns();
        let next = reorder_column(&board, &ColumnId::from("A"), &ColumnId::from("E"));

        let mut before = ids(&board);
        let mut after = ids(&next);
        before.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        after.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(before, after);
        for col in &board.columns {
            assert_eq!(next.column(&col.id), Some(col));
        }
    }

    #[test]
    fn test_reorder_noops() {
        let board = five_columns();
        let a = ColumnId::from("A");

        assert_eq!(reorder_column(&board, &a, &a), board);
        assert_eq!(reorder_column(&board, &a, &ColumnId::from("Z")), board);
        assert_eq!(reorder_column(&board, &ColumnId::from("Z"), &a), board);
    }

    #[test]
    fn test_seed_scenario() {
        let board = Board::seed();
        let todo = board.columns[0].id.clone();
        let in_progress = board.columns[1].id.clone();
        let done = board.columns[2].id.clone();
        let sample = board.columns[0].cards[0].clone();

        let board = add_card(&board, &todo, "Write spec");
        assert_eq!(board.columns[0].cards.len(), 2);
        assert_eq!(board.columns[0].cards[0], sample);
        assert_eq!(board.columns[0].cards[1].content, "Write spec");

        let board = move_card(&board, &sample.id, &todo, &done);
        assert_eq!(board.columns[0].cards.len(), 1);
        assert_eq!(board.columns[2].cards, vec![sample]);
        assert!(board.column(&in_progress).unwrap().cards.is_empty());
    }

    #[test]
    fn test_command_serde_tagging() {
        let command = Command::MoveCard {
            card_id: CardId::from("k1"),
            from_column: ColumnId::from("a"),
            to_column: ColumnId::from("b"),
        };

        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "move_card", "card_id": "k1", "from_column": "a", "to_column": "b" })
        );
        let back: Command = serde_json::from_value(json).unwrap();
        assert_eq!(back, command);
    }
}
