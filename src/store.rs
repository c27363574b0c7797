//! Loading and saving the board under a single storage key.

use crate::{domain::Board, error::Result, storage::Storage};
use tracing::{debug, warn};

/// Persists a [`Board`] as JSON under one key of a [`Storage`] backend.
pub struct BoardStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> BoardStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the persisted board.
    ///
    /// Missing, unreadable, or malformed data yields an empty board; this
    /// never fails.
    pub async fn load(&self) -> Board {
        let contents = match self.storage.read(&self.key).await {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!(key = %self.key, "no saved board, starting empty");
                return Board::default();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read saved board, starting empty");
                return Board::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(board) => board,
            Err(e) => {
                warn!(key = %self.key, error = %e, "saved board is malformed, starting empty");
                Board::default()
            }
        }
    }

    /// Serializes the whole board and writes it
    pub async fn save(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string(board)?;
        self.storage.write(&self.key, &json).await?;
        debug!(key = %self.key, cards = board.total_cards(), "board saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, ColumnKey};
    use crate::storage::{FileStorage, MemoryStorage};
    use proptest::prelude::*;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    const KEY: &str = "dnd-board-state";

    #[tokio::test]
    async fn test_load_missing_is_empty_board() {
        let store = BoardStore::new(MemoryStorage::new(), KEY);
        assert_eq!(store.load().await, Board::default());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_load_malformed_is_empty_board() {
        let store = BoardStore::new(MemoryStorage::with_entry(KEY, "{\"todo\": [oops"), KEY);
        assert_eq!(store.load().await, Board::default());
        assert!(logs_contain("saved board is malformed"));
    }

    #[tokio::test]
    async fn test_load_wrong_shape_is_empty_board() {
        let store = BoardStore::new(MemoryStorage::with_entry(KEY, "[1, 2, 3]"), KEY);
        assert_eq!(store.load().await, Board::default());
    }

    #[tokio::test]
    async fn test_save_writes_plain_json() {
        let store = BoardStore::new(MemoryStorage::new(), KEY);
        let mut board = Board::new();
        board.append_card(ColumnKey::Todo, Card::new("A"));

        store.save(&board).await.unwrap();

        let raw = store.storage().read(KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"todo":[{"text":"A"}],"inprogress":[],"done":[]}"#);
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = BoardStore::new(FileStorage::new(temp_dir.path()), KEY);

        let mut board = Board::new();
        board.append_card(ColumnKey::Todo, Card::new("A"));
        board.append_card(ColumnKey::Todo, Card::new("B"));
        board.append_card(ColumnKey::Done, Card::new("C"));
        store.save(&board).await.unwrap();

        let reopened = BoardStore::new(FileStorage::new(temp_dir.path()), KEY);
        assert_eq!(reopened.load().await, board);
    }

    fn arb_column() -> impl Strategy<Value = Vec<Card>> {
        prop::collection::vec(".{0,12}".prop_map(Card::new), 0..6)
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        (arb_column(), arb_column(), arb_column()).prop_map(|(todo, inprogress, done)| {
            let mut board = Board::new();
            for (column, cards) in [
                (ColumnKey::Todo, todo),
                (ColumnKey::InProgress, inprogress),
                (ColumnKey::Done, done),
            ] {
                for card in cards {
                    board.append_card(column, card);
                }
            }
            board
        })
    }

    proptest! {
        /// Property: load(save(B)) == B
        #[test]
        fn prop_save_load_round_trip(board in arb_board()) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let loaded = rt.block_on(async {
                let store = BoardStore::new(MemoryStorage::new(), KEY);
                store.save(&board).await.unwrap();
                store.load().await
            });
            prop_assert_eq!(loaded, board);
        }
    }
}
