use crate::{
    domain::{Board, Card, ColumnKey},
    drag::resolver::Marker,
    error::{BoardError, Result},
};
use tracing::debug;

/// The card being dragged and where it was picked up from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub source_column: ColumnKey,
    pub source_index: usize,
    pub card: Card,
}

impl DragSession {
    /// Whether the stored card at (column, index) is the one being dragged
    pub fn is_source(&self, column: ColumnKey, index: usize) -> bool {
        self.source_column == column && self.source_index == index
    }
}

/// Drag state machine: Idle until a drag starts, back to Idle on drop or cancel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        session: DragSession,
        /// Where the card would land if dropped now. Starts on the card's
        /// own slot; `None` while the pointer is outside every drop zone.
        marker: Option<Marker>,
    },
}

impl DragState {
    /// Idle → Dragging, capturing the card at (column, index). The marker
    /// takes the card's place until the pointer moves elsewhere.
    pub fn start(&mut self, board: &Board, column: ColumnKey, index: usize) -> Result<()> {
        if self.is_dragging() {
            return Err(BoardError::DragAlreadyActive);
        }

        let card = board
            .card(column, index)
            .cloned()
            .ok_or(BoardError::CardNotFound { column, index })?;

        debug!(%column, index, "drag started");
        *self = DragState::Dragging {
            session: DragSession {
                source_column: column,
                source_index: index,
                card,
            },
            marker: Some(Marker {
                column,
                slot: index,
            }),
        };
        Ok(())
    }

    /// Keeps the drag consistent after the card at (column, index) is
    /// removed from the board.
    ///
    /// Removing the dragged card, or any card above it in its column, shifts
    /// its position, so the drag is cancelled; returns `true` in that case.
    /// Otherwise a marker below the removed card moves up one slot.
    pub fn card_removed(&mut self, column: ColumnKey, index: usize) -> bool {
        let shifts_source = match self {
            DragState::Dragging { session, .. } => {
                session.source_column == column && index <= session.source_index
            }
            DragState::Idle => return false,
        };

        if shifts_source {
            debug!(%column, index, "drag cancelled by card deletion");
            *self = DragState::Idle;
            return true;
        }

        if let DragState::Dragging {
            marker: Some(current),
            ..
        } = self
        {
            if current.column == column && current.slot > index {
                current.slot -= 1;
            }
        }
        false
    }

    /// Any state → Idle, returning the session and marker that were active
    pub fn finish(&mut self) -> Option<(DragSession, Option<Marker>)> {
        match std::mem::take(self) {
            DragState::Dragging { session, marker } => Some((session, marker)),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging { session, .. } => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn marker(&self) -> Option<&Marker> {
        match self {
            DragState::Dragging { marker, .. } => marker.as_ref(),
            DragState::Idle => None,
        }
    }

    pub(crate) fn parts_mut(&mut self) -> Option<(&DragSession, &mut Option<Marker>)> {
        match self {
            DragState::Dragging { session, marker } => Some((&*session, marker)),
            DragState::Idle => None,
        }
    }
}
