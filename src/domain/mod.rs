pub mod board;
pub mod card;

pub use board::Board;
pub use card::{Card, ColumnKey};
