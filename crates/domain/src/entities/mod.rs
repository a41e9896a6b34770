//! Domain entities - characters, warbands and rule-table entries

mod character;
mod item;
mod modifier;
mod scroll;
mod warband;

pub use character::{AmmoTracker, Character};
pub use item::Item;
pub use modifier::{Modifier, ModifierKind, ModifierRef};
pub use scroll::Scroll;
pub use warband::{WarbandData, STARTING_GOLD};
