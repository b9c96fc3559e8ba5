pub mod board;
pub mod card;
pub mod column;
pub mod drag;
pub mod operations;

pub use board::Board;
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use drag::DragState;
pub use operations::{Command, Outcome};
