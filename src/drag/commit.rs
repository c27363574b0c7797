use crate::{
    domain::{Board, ColumnKey},
    drag::{resolver::Marker, session::DragSession},
};
use tracing::info;

/// What a drop does to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card moved; `to_index` is its final index in `to_column`
    Moved {
        from_column: ColumnKey,
        from_index: usize,
        to_column: ColumnKey,
        to_index: usize,
    },
    /// Dropped back onto its own spot
    NoOp,
    /// Dropped with no marker on the board
    Cancelled,
}

impl DropOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, DropOutcome::Moved { .. })
    }
}

/// Turns the final marker of a drag into a single board move
pub struct ReorderCommitter;

impl ReorderCommitter {
    /// Decides what a drop at `marker` means for the dragged card.
    ///
    /// Within the source column, slots `source_index` and `source_index + 1`
    /// are the card's own spot. Below that, the slot is one too high once the
    /// card has been removed, so it is decremented.
    pub fn plan(session: &DragSession, marker: Option<&Marker>) -> DropOutcome {
        let Some(marker) = marker else {
            return DropOutcome::Cancelled;
        };

        let same_column = marker.column == session.source_column;
        let source = session.source_index;

        if same_column && (marker.slot == source || marker.slot == source + 1) {
            return DropOutcome::NoOp;
        }

        let to_index = if same_column && source < marker.slot {
            marker.slot - 1
        } else {
            marker.slot
        };

        DropOutcome::Moved {
            from_column: session.source_column,
            from_index: source,
            to_column: marker.column,
            to_index,
        }
    }

    /// Applies a planned drop. Returns whether the board changed.
    pub fn apply(board: &mut Board, outcome: &DropOutcome) -> bool {
        match *outcome {
            DropOutcome::Moved {
                from_column,
                from_index,
                to_column,
                to_index,
            } => {
                board.move_card(from_column, from_index, to_column, to_index);
                info!(
                    from = %from_column,
                    from_index,
                    to = %to_column,
                    to_index,
                    "card moved"
                );
                true
            }
            DropOutcome::NoOp | DropOutcome::Cancelled => false,
        }
    }

    /// Undoes an applied drop, putting the card back where it was picked up
    pub fn revert(board: &mut Board, outcome: &DropOutcome) {
        if let DropOutcome::Moved {
            from_column,
            from_index,
            to_column,
            to_index,
        } = *outcome
        {
            board.move_card(to_column, to_index, from_column, from_index);
        }
    }
}
