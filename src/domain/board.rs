use crate::domain::card::{Card, ColumnKey};
use serde::{Deserialize, Serialize};

/// Kanban board state: one ordered card list per column.
///
/// The serialized form is `{"todo": [...], "inprogress": [...], "done": [...]}`.
/// A column missing from persisted data loads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    todo: Vec<Card>,
    #[serde(default)]
    inprogress: Vec<Card>,
    #[serde(default)]
    done: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards of a column, top to bottom
    pub fn cards(&self, column: ColumnKey) -> &[Card] {
        match column {
            ColumnKey::Todo => &self.todo,
            ColumnKey::InProgress => &self.inprogress,
            ColumnKey::Done => &self.done,
        }
    }

    fn cards_mut(&mut self, column: ColumnKey) -> &mut Vec<Card> {
        match column {
            ColumnKey::Todo => &mut self.todo,
            ColumnKey::InProgress => &mut self.inprogress,
            ColumnKey::Done => &mut self.done,
        }
    }

    pub fn card(&self, column: ColumnKey, index: usize) -> Option<&Card> {
        self.cards(column).get(index)
    }

    pub fn len(&self, column: ColumnKey) -> usize {
        self.cards(column).len()
    }

    pub fn is_empty(&self, column: ColumnKey) -> bool {
        self.cards(column).is_empty()
    }

    /// Number of cards across all columns
    pub fn total_cards(&self) -> usize {
        ColumnKey::ALL.iter().map(|&column| self.len(column)).sum()
    }

    /// Inserts a card at `index`, shifting later cards down.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_card(&mut self, column: ColumnKey, index: usize, card: Card) {
        let cards = self.cards_mut(column);
        assert!(
            index <= cards.len(),
            "insert index {} out of range for column {} (len {})",
            index,
            column,
            cards.len()
        );
        cards.insert(index, card);
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove_card(&mut self, column: ColumnKey, index: usize) -> Card {
        let cards = self.cards_mut(column);
        assert!(
            index < cards.len(),
            "remove index {} out of range for column {} (len {})",
            index,
            column,
            cards.len()
        );
        cards.remove(index)
    }

    /// Appends a card to the bottom of a column and returns its index
    pub fn append_card(&mut self, column: ColumnKey, card: Card) -> usize {
        let cards = self.cards_mut(column);
        cards.push(card);
        cards.len() - 1
    }

    /// Moves a card in one step. `to_index` is in post-removal coordinates,
    /// so callers translating a marker slot must correct it first.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Both are checked before any
    /// change is made.
    pub fn move_card(
        &mut self,
        from_column: ColumnKey,
        from_index: usize,
        to_column: ColumnKey,
        to_index: usize,
    ) {
        let target_len = if from_column == to_column {
            self.len(to_column).saturating_sub(1)
        } else {
            self.len(to_column)
        };
        assert!(
            from_index < self.len(from_column),
            "move source {}[{}] out of range",
            from_column,
            from_index
        );
        assert!(
            to_index <= target_len,
            "move target {}[{}] out of range",
            to_column,
            to_index
        );

        let card = self.remove_card(from_column, from_index);
        self.insert_card(to_column, to_index, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_of(texts: &[&str]) -> Vec<Card> {
        texts.iter().map(|t| Card::new(*t)).collect()
    }

    fn texts(board: &Board, column: ColumnKey) -> Vec<&str> {
        board.cards(column).iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_board_creation() {
        let board = Board::new();
        for column in ColumnKey::ALL {
            assert!(board.is_empty(column));
        }
        assert_eq!(board.total_cards(), 0);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut board = Board::new();
        board.insert_card(ColumnKey::Todo, 0, Card::new("B"));
        board.insert_card(ColumnKey::Todo, 0, Card::new("A"));
        board.insert_card(ColumnKey::Todo, 2, Card::new("C"));
        assert_eq!(texts(&board, ColumnKey::Todo), vec!["A", "B", "C"]);

        let removed = board.remove_card(ColumnKey::Todo, 1);
        assert_eq!(removed.text, "B");
        assert_eq!(texts(&board, ColumnKey::Todo), vec!["A", "C"]);
    }

    #[test]
    fn test_append_card_returns_index() {
        let mut board = Board::new();
        assert_eq!(board.append_card(ColumnKey::Done, Card::new("x")), 0);
        assert_eq!(board.append_card(ColumnKey::Done, Card::new("y")), 1);
    }

    #[test]
    fn test_move_card_across_columns() {
        let mut board = Board::new();
        board.todo = column_of(&["A", "B"]);
        board.done = column_of(&["X"]);

        board.move_card(ColumnKey::Todo, 0, ColumnKey::Done, 1);
        assert_eq!(texts(&board, ColumnKey::Todo), vec!["B"]);
        assert_eq!(texts(&board, ColumnKey::Done), vec!["X", "A"]);
    }

    #[test]
    fn test_move_card_within_column() {
        let mut board = Board::new();
        board.todo = column_of(&["A", "B", "C"]);

        board.move_card(ColumnKey::Todo, 0, ColumnKey::Todo, 2);
        assert_eq!(texts(&board, ColumnKey::Todo), vec!["B", "C", "A"]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_insert_out_of_range_panics() {
        let mut board = Board::new();
        board.insert_card(ColumnKey::Todo, 1, Card::new("A"));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range_panics() {
        let mut board = Board::new();
        board.remove_card(ColumnKey::InProgress, 0);
    }

    #[test]
    #[should_panic(expected = "move target")]
    fn test_move_checks_target_before_removing() {
        let mut board = Board::new();
        board.todo = column_of(&["A", "B"]);
        board.move_card(ColumnKey::Todo, 0, ColumnKey::Todo, 2);
    }

    #[test]
    fn test_missing_column_deserializes_empty() {
        let board: Board = serde_json::from_str(r#"{"todo":[{"text":"A"}]}"#).unwrap();
        assert_eq!(texts(&board, ColumnKey::Todo), vec!["A"]);
        assert!(board.is_empty(ColumnKey::InProgress));
        assert!(board.is_empty(ColumnKey::Done));
    }

    #[test]
    fn test_serialized_shape() {
        let mut board = Board::new();
        board.append_card(ColumnKey::InProgress, Card::new("A"));
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"todo":[],"inprogress":[{"text":"A"}],"done":[]}"#);
    }
}
