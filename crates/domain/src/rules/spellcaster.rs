//! Spellcaster toggle and scroll slot rules.
//!
//! While a character is a spellcaster, slot 0 holds its clean scroll and
//! slot 1 its unclean scroll. Becoming a spellcaster strips restricted gear
//! (heavy armour, shields, two-handed items) and clears both reserved slots.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::Character;
use crate::rules::character_stats::MIN_INVENTORY;
use crate::rules::items::{
    ensure_inventory_size, is_item_restricted_for_spellcaster, reserve_scroll_slots,
};
use crate::value_objects::{InventorySlot, ScrollKind};

/// An item taken off a character by the spellcaster toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedItem {
    pub name: String,
    /// Gold refunded for it; zero for gear acquired during this edit
    pub cost: u32,
}

/// Outcome of toggling spellcaster status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellcasterChange {
    pub character: Character,
    pub refund_amount: u32,
    pub removed_items: Vec<RemovedItem>,
}

/// Turn spellcasting on or off for `character`.
///
/// `original` is the character as it was when the edit session began.
/// Restricted gear it already carried is refunded at catalog cost; gear
/// added during the session is removed without refund.
pub fn handle_spellcaster_change(
    character: &Character,
    original: Option<&Character>,
    checked: bool,
    catalog: &Catalog,
) -> SpellcasterChange {
    let mut next = character.clone();

    if !checked {
        next.is_spellcaster = false;
        next.clean_scroll = None;
        next.unclean_scroll = None;
        if next.items.len() >= MIN_INVENTORY {
            next.items[0] = InventorySlot::Empty;
            next.items[1] = InventorySlot::Empty;
        }
        return SpellcasterChange {
            character: next,
            refund_amount: 0,
            removed_items: Vec::new(),
        };
    }

    let mut refund_amount = 0;
    let mut removed_items = Vec::new();

    for slot in next.items.iter_mut() {
        let Some(name) = slot.item_name() else {
            continue;
        };
        if !is_item_restricted_for_spellcaster(name, catalog) {
            continue;
        }
        if let Some(item) = catalog.item(name) {
            let bought_before = original.is_some_and(|o| o.find_item(name).is_some());
            let cost = if bought_before { item.cost } else { 0 };
            refund_amount += cost;
            removed_items.push(RemovedItem {
                name: item.name.clone(),
                cost,
            });
        }
        *slot = InventorySlot::Empty;
    }

    reserve_scroll_slots(&mut next);

    next.is_spellcaster = true;
    next.clean_scroll = Some(String::new());
    next.unclean_scroll = Some(String::new());
    next.items[0] = InventorySlot::Empty;
    next.items[1] = InventorySlot::Empty;
    ensure_inventory_size(&mut next);

    SpellcasterChange {
        character: next,
        refund_amount,
        removed_items,
    }
}

/// Put `scroll_name` into the slot reserved for `kind`.
///
/// `None` clears the choice and shows the slot's placeholder.
pub fn handle_scroll_select(
    character: &Character,
    kind: ScrollKind,
    scroll_name: Option<&str>,
) -> Character {
    let mut next = character.clone();
    reserve_scroll_slots(&mut next);

    let choice = Some(scroll_name.unwrap_or_default().to_string());
    match kind {
        ScrollKind::Clean => next.clean_scroll = choice,
        ScrollKind::Unclean => next.unclean_scroll = choice,
    }
    next.items[kind.slot_index()] =
        scroll_name.map_or(InventorySlot::ScrollPlaceholder(kind), InventorySlot::item);
    ensure_inventory_size(&mut next);
    next
}
