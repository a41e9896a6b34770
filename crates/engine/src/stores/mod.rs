//! In-memory state storage modules.
//!
//! Stores hold runtime state that sits in front of the repository:
//! - `WarbandStore` - Live warband and the character editor session
//! - `UndoStore` - Single pending undo action with a short expiry

pub mod error;
pub mod patch;
pub mod undo;
pub mod warband;

// Re-export store types
pub use error::StoreError;
pub use patch::{CharacterPatch, WarbandPatch};
pub use undo::{UndoAction, UndoStore, UNDO_TIMEOUT_MS};
pub use warband::{WarbandState, WarbandStore};
