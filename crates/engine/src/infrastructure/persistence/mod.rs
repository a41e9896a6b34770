//! Warband persistence adapters.
//!
//! Both adapters implement `WarbandRepository` and share the per-user
//! listener registry, so subscribers see every successful save.

mod document;
mod json_file;
mod listeners;
mod memory;

pub use document::{StoredCharacter, StoredWarband, WarbandDocument};
pub use json_file::JsonFileWarbandRepository;
pub use listeners::ListenerRegistry;
pub use memory::InMemoryWarbandRepository;
