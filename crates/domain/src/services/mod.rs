//! Character services: gameplay mutations and edit-session operations.

pub mod character;
pub mod editor;

pub use character::{
    add_injury, clamp_hp, clone_character, clone_warband_data, drop_item, pick_up_item,
    refill_ammo, remove_injury, revive_character, take_damage, use_ammo, AMMO_ITEM,
};
pub use editor::{
    apply_modifier, apply_spellcaster_change, remove_item, remove_item_with_optional_refund,
    remove_modifier, select_scroll, update_item_selection, update_stat_and_inventory,
    ItemRemoval, StatChange,
};
