//! Value objects: small immutable types with no identity.

mod inventory_slot;
mod stat;
mod stat_modifiers;

pub use inventory_slot::{InventorySlot, ScrollKind};
pub use stat::Stat;
pub use stat_modifiers::{ModifiedStats, StatModifiers, WeaponRestriction};
