//! Warband domain: characters, rule tables and the pure rules that keep
//! character sheets consistent.
//!
//! Nothing in this crate performs I/O. Persistence, undo and subscriptions
//! live in `warband-engine`.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod rules;
pub mod services;
pub mod value_objects;

pub use catalog::{Catalog, CatalogBuilder};
pub use entities::{
    AmmoTracker, Character, Item, Modifier, ModifierKind, ModifierRef, Scroll, WarbandData,
    STARTING_GOLD,
};
pub use error::DomainError;
pub use value_objects::{
    InventorySlot, ModifiedStats, ScrollKind, Stat, StatModifiers, WeaponRestriction,
};
