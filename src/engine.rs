//! Event handlers for a board view.
//!
//! [`BoardEngine`] owns the board, the drag state and the store. A view calls
//! one method per input event and re-renders from [`BoardEngine::columns`]
//! when told to.

use crate::{
    config::BoardConfig,
    display::{self, ColumnView, DisplayItem},
    domain::{Board, Card, ColumnKey},
    drag::{CardBounds, DragState, DropOutcome, InsertionResolver, MarkerUpdate, ReorderCommitter},
    error::{BoardError, Result},
    storage::Storage,
    store::BoardStore,
};
use tracing::{debug, info, warn};

/// When the view should redraw after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    /// Redraw now
    Now,
    /// Redraw once the current event has finished, so the drag image is
    /// captured from the untouched card first
    Deferred,
    /// Nothing changed
    Skip,
}

impl From<MarkerUpdate> for RenderHint {
    fn from(update: MarkerUpdate) -> Self {
        match update {
            MarkerUpdate::Moved(_) | MarkerUpdate::Removed => RenderHint::Now,
            MarkerUpdate::Unchanged => RenderHint::Skip,
        }
    }
}

/// A board plus the drag gesture in flight, if any
pub struct BoardEngine<S> {
    config: BoardConfig,
    store: BoardStore<S>,
    board: Board,
    drag: DragState,
}

impl<S: Storage> BoardEngine<S> {
    /// Loads the board from `storage`; missing or unreadable state starts empty
    pub async fn open(storage: S, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let store = BoardStore::new(storage, config.storage_key.clone());
        let board = store.load().await;
        info!(board = %config.name, cards = board.total_cards(), "board opened");

        Ok(Self {
            config,
            store,
            board,
            drag: DragState::Idle,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn store(&self) -> &BoardStore<S> {
        &self.store
    }

    pub fn display_list(&self, column: ColumnKey) -> Vec<DisplayItem<'_>> {
        display::display_list(&self.board, &self.drag, column)
    }

    pub fn columns(&self) -> Vec<ColumnView<'_>> {
        display::columns(&self.board, &self.drag, &self.config)
    }

    /// Drag started on the card at (column, index)
    pub fn drag_start(&mut self, column: ColumnKey, index: usize) -> Result<RenderHint> {
        self.drag.start(&self.board, column, index)?;
        Ok(RenderHint::Deferred)
    }

    /// Pointer moved over the card at (column, index)
    pub fn drag_over_card(
        &mut self,
        column: ColumnKey,
        index: usize,
        bounds: CardBounds,
        pointer_y: f64,
    ) -> MarkerUpdate {
        let Some((session, marker)) = self.drag.parts_mut() else {
            return MarkerUpdate::Unchanged;
        };
        InsertionResolver::new(&self.board, session).over_card(marker, column, index, bounds.side(pointer_y))
    }

    /// Pointer moved over a column's card area outside any card
    pub fn drag_over_column(&mut self, column: ColumnKey) -> MarkerUpdate {
        let Some((session, marker)) = self.drag.parts_mut() else {
            return MarkerUpdate::Unchanged;
        };
        InsertionResolver::new(&self.board, session).over_column(marker, column)
    }

    /// Pointer left a column's drop zone
    pub fn drag_leave_column(&mut self, column: ColumnKey) -> MarkerUpdate {
        let Some((session, marker)) = self.drag.parts_mut() else {
            return MarkerUpdate::Unchanged;
        };
        InsertionResolver::new(&self.board, session).leave_column(marker, column)
    }

    /// Pointer left the board area
    pub fn drag_leave_board(&mut self) -> MarkerUpdate {
        let Some((session, marker)) = self.drag.parts_mut() else {
            return MarkerUpdate::Unchanged;
        };
        InsertionResolver::new(&self.board, session).leave_board(marker)
    }

    /// Card released. Commits the move at the current marker and saves.
    ///
    /// The drag ends whatever the outcome. If the save fails the move is
    /// undone, so the board shown matches what storage holds.
    pub async fn drop_card(&mut self) -> Result<DropOutcome> {
        let Some((session, marker)) = self.drag.finish() else {
            debug!("drop with no active drag ignored");
            return Ok(DropOutcome::Cancelled);
        };

        let outcome = ReorderCommitter::plan(&session, marker.as_ref());
        if !ReorderCommitter::apply(&mut self.board, &outcome) {
            debug!(?outcome, "drop left board unchanged");
            return Ok(outcome);
        }

        if let Err(e) = self.store.save(&self.board).await {
            ReorderCommitter::revert(&mut self.board, &outcome);
            warn!(error = %e, "save failed, move rolled back");
            return Err(e);
        }
        Ok(outcome)
    }

    /// Drag ended. Without a preceding drop this cancels the drag.
    pub fn drag_end(&mut self) -> RenderHint {
        match self.drag.finish() {
            Some((session, _)) => {
                debug!(column = %session.source_column, index = session.source_index, "drag cancelled");
                RenderHint::Now
            }
            None => RenderHint::Skip,
        }
    }

    /// Appends a card with the trimmed `text`. Blank input is ignored.
    ///
    /// The card is taken back off the board if the save fails.
    pub async fn add_card(&mut self, column: ColumnKey, text: &str) -> Result<Option<usize>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let index = self.board.append_card(column, Card::new(text));
        if let Err(e) = self.store.save(&self.board).await {
            self.board.remove_card(column, index);
            warn!(error = %e, "save failed, card not added");
            return Err(e);
        }
        info!(%column, index, "card added");
        Ok(Some(index))
    }

    /// Deletes the card at (column, index).
    ///
    /// A drag in flight is cancelled when the deletion shifts the dragged
    /// card's position; otherwise its marker is kept in step. If the save
    /// fails the card is restored and the drag left untouched.
    pub async fn delete_card(&mut self, column: ColumnKey, index: usize) -> Result<Card> {
        if index >= self.board.len(column) {
            return Err(BoardError::CardNotFound { column, index });
        }

        let card = self.board.remove_card(column, index);
        if let Err(e) = self.store.save(&self.board).await {
            self.board.insert_card(column, index, card);
            warn!(error = %e, "save failed, card not deleted");
            return Err(e);
        }

        self.drag.card_removed(column, index);
        info!(%column, index, "card deleted");
        Ok(card)
    }
}
