//! # dnd-board-core
//!
//! Drag-and-drop reordering engine for a three-column kanban board.
//!
//! The crate tracks an in-progress drag, resolves a live insertion marker
//! among the cards of any column, and commits a deterministic reorder on drop.
//! Boards are persisted as JSON under a single key of a pluggable storage
//! backend. Rendering is left to the caller, which reads
//! [`BoardEngine::columns`] after each event.

pub mod config;
pub mod display;
pub mod domain;
pub mod drag;
pub mod engine;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use config::{BoardConfig, ColumnConfig};
pub use display::{ColumnView, DisplayItem};
pub use domain::{Board, Card, ColumnKey};
pub use drag::{CardBounds, DragSession, DragState, DropOutcome, Marker, MarkerUpdate, Side};
pub use engine::{BoardEngine, RenderHint};
pub use error::{BoardError, Result};
pub use storage::Storage;
pub use store::BoardStore;
