//! Drag-and-drop reordering: session state, marker resolution, and the
//! commit that turns a drop into a board move.

pub mod commit;
pub mod resolver;
pub mod session;

pub use commit::{DropOutcome, ReorderCommitter};
pub use resolver::{CardBounds, InsertionResolver, Marker, MarkerUpdate, Side};
pub use session::{DragSession, DragState};
