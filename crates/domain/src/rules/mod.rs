//! Pure rule functions over characters and warbands.
//!
//! Every function takes borrowed values and returns new ones; nothing here
//! mutates its arguments.

pub mod character_stats;
pub mod items;
pub mod spellcaster;
pub mod warband;

pub use character_stats::{
    base_inventory_size, calculate_character_cost, calculate_modified_stats,
    calculate_total_armour, clamp_hp_to_max, default_character, get_base_hp, get_base_inventory,
    max_hp, HpClamp, BASE_HP, BASE_INVENTORY, MIN_INVENTORY, SPELLCASTER_COST,
};
pub use items::{
    get_initial_ammo, is_item_restricted_for_spellcaster, item_uses_ammo, offset_inventory,
    update_inventory,
};
pub use spellcaster::{
    handle_scroll_select, handle_spellcaster_change, RemovedItem, SpellcasterChange,
};
pub use warband::calculate_gold_difference;
