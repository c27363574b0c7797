//! Live insertion point tracking while a card is dragged.
//!
//! Slots are gap indices into a column's stored card list: slot `i` sits
//! just above the card stored at index `i`, slot `len` is the bottom of the
//! column. The dragged card keeps its stored index during the drag, so in the
//! source column slots `source_index` and `source_index + 1` render as the
//! same place (the hidden card's own spot).

use crate::{
    domain::{Board, ColumnKey},
    drag::session::DragSession,
};
use tracing::debug;

/// Where the dragged card would land if dropped now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub column: ColumnKey,
    pub slot: usize,
}

impl Marker {
    /// Position of the marker among the cards actually displayed (the
    /// dragged card excluded)
    pub fn display_index(&self, session: &DragSession) -> usize {
        if self.column == session.source_column && self.slot > session.source_index {
            self.slot - 1
        } else {
            self.slot
        }
    }

    fn same_visual_slot(&self, other: &Marker, session: &DragSession) -> bool {
        self.column == other.column && self.display_index(session) == other.display_index(session)
    }
}

/// Which half of a card the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// Vertical extent of a rendered card, in the same units as the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Splits the card at its vertical midpoint: the upper half maps to
    /// `Before`, the midpoint and below to `After`.
    pub fn side(&self, pointer_y: f64) -> Side {
        if pointer_y - self.top < self.height / 2.0 {
            Side::Before
        } else {
            Side::After
        }
    }
}

/// Result of feeding one pointer event to the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerUpdate {
    /// The marker now sits at a new slot
    Moved(Marker),
    /// The marker was taken off the board; the drag continues
    Removed,
    /// Nothing to redraw
    Unchanged,
}

/// Computes marker positions for one active drag
pub struct InsertionResolver<'a> {
    board: &'a Board,
    session: &'a DragSession,
}

impl<'a> InsertionResolver<'a> {
    pub fn new(board: &'a Board, session: &'a DragSession) -> Self {
        Self { board, session }
    }

    /// Pointer is over the card stored at `index` of `column`
    pub fn over_card(
        &self,
        marker: &mut Option<Marker>,
        column: ColumnKey,
        index: usize,
        side: Side,
    ) -> MarkerUpdate {
        if index >= self.board.len(column) {
            debug!(%column, index, "drag over unknown card ignored");
            return MarkerUpdate::Unchanged;
        }

        // The dragged card is not displayed, so it is never a real hover target
        if self.session.is_source(column, index) {
            return MarkerUpdate::Unchanged;
        }

        let slot = match side {
            Side::Before => index,
            Side::After => index + 1,
        };
        self.place(marker, Marker { column, slot })
    }

    /// Pointer is over a column's card area but not over any card.
    ///
    /// A column that does not hold the marker yet gets it at the bottom; for a
    /// column with nothing displayed that is its only slot.
    pub fn over_column(&self, marker: &mut Option<Marker>, column: ColumnKey) -> MarkerUpdate {
        if matches!(marker, Some(current) if current.column == column) {
            return MarkerUpdate::Unchanged;
        }

        let slot = self.board.len(column);
        self.place(marker, Marker { column, slot })
    }

    /// Pointer left one column's drop zone
    pub fn leave_column(&self, marker: &mut Option<Marker>, column: ColumnKey) -> MarkerUpdate {
        if !matches!(marker, Some(current) if current.column == column) {
            return MarkerUpdate::Unchanged;
        }

        *marker = None;
        debug!(%column, "marker removed on column leave");
        MarkerUpdate::Removed
    }

    /// Pointer left the board entirely
    pub fn leave_board(&self, marker: &mut Option<Marker>) -> MarkerUpdate {
        match marker.take() {
            Some(_) => {
                debug!("marker removed on board leave");
                MarkerUpdate::Removed
            }
            None => MarkerUpdate::Unchanged,
        }
    }

    fn place(&self, marker: &mut Option<Marker>, candidate: Marker) -> MarkerUpdate {
        if let Some(current) = marker {
            if current.same_visual_slot(&candidate, self.session) {
                return MarkerUpdate::Unchanged;
            }
        }

        debug!(column = %candidate.column, slot = candidate.slot, "marker moved");
        *marker = Some(candidate);
        MarkerUpdate::Moved(candidate)
    }
}
