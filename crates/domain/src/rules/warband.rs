//! Warband economy rules.

use crate::catalog::Catalog;
use crate::entities::{Character, WarbandData};
use crate::rules::character_stats::calculate_character_cost;

/// Gold to deduct when saving an edited character.
///
/// `index` is the stored character being replaced, `None` for a new one.
/// Items the stored character carried that were not picked up are credited
/// back, so only newly bought gear costs gold. Negative values are refunds.
pub fn calculate_gold_difference(
    character: &Character,
    index: Option<usize>,
    warband: &WarbandData,
    catalog: &Catalog,
) -> i64 {
    let new_cost = i64::from(calculate_character_cost(character, catalog));

    let Some(stored) = index.and_then(|i| warband.character(i)) else {
        return new_cost;
    };

    let old_cost = i64::from(calculate_character_cost(stored, catalog));
    let dropped_items_cost: i64 = stored
        .item_names()
        .filter(|name| !character.has_picked_up(name))
        .map(|name| i64::from(catalog.item_cost(name)))
        .sum();

    new_cost - (old_cost - dropped_items_cost)
}
