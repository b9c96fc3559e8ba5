use crate::domain::card::{Card, CardId};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, board-unique identifier of a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Generates a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered bucket of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates an empty column with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Position of a card within this column
    pub fn card_position(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }
}
