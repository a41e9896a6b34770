//! Item entity - a purchasable piece of equipment from the item table.

use serde::{Deserialize, Serialize};

/// Catalog entry for a piece of equipment.
///
/// This is a data-carrying struct with no invariants to protect beyond the
/// catalog-level uniqueness of `name`, which the catalog builder enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique key, stored under `item` in the game data
    #[serde(rename = "item")]
    pub name: String,
    /// Gold cost when bought at roster-build time
    pub cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armour: Option<i32>,
    /// Shots per refill; presence marks the item as ammo-consuming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<u32>,
    /// Slots granted while carried (Backpack)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_inventory_slots: Option<i32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub two_handed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            armour: None,
            ammo: None,
            extra_inventory_slots: None,
            two_handed: false,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_armour(mut self, armour: i32) -> Self {
        self.armour = Some(armour);
        self
    }

    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = Some(ammo);
        self
    }

    pub fn with_extra_inventory_slots(mut self, slots: i32) -> Self {
        self.extra_inventory_slots = Some(slots);
        self
    }

    pub fn two_handed(mut self) -> Self {
        self.two_handed = true;
        self
    }

    pub fn uses_ammo(&self) -> bool {
        self.ammo.is_some()
    }

    /// Inventory delta granted while carried, zero when absent.
    pub fn inventory_delta(&self) -> i32 {
        self.extra_inventory_slots.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_game_data_shape() {
        let json = r#"{"item":"Bow","cost":5,"ammo":3,"twoHanded":true,"description":"ranged"}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.name, "Bow");
        assert_eq!(item.cost, 5);
        assert!(item.uses_ammo());
        assert!(item.two_handed);
        assert_eq!(item.inventory_delta(), 0);
    }

    #[test]
    fn builder_sets_optional_fields() {
        let backpack = Item::new("Backpack", 1).with_extra_inventory_slots(2);
        assert_eq!(backpack.inventory_delta(), 2);
        assert!(!backpack.uses_ammo());
    }
}
