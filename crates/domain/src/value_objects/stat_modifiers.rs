//! StatModifiers, WeaponRestriction and ModifiedStats.
//!
//! Feats, flaws and injuries carry a sparse set of stat deltas. Aggregating
//! them over a character produces [`ModifiedStats`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Restriction on which weapons a character can wield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponRestriction {
    /// Two-handed weapons cannot be equipped
    #[serde(rename = "one-handed")]
    OneHanded,
    /// Unknown restriction for forward compatibility
    #[serde(other)]
    Unknown,
}

impl fmt::Display for WeaponRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneHanded => write!(f, "one-handed"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for WeaponRestriction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-handed" => Ok(Self::OneHanded),
            _ => Ok(Self::Unknown),
        }
    }
}

/// Sparse stat deltas attached to a catalog entry.
///
/// Absent fields contribute nothing. `extra_inventory_slots` always lands in
/// [`ModifiedStats::equipment_slots`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatModifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toughness: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armour: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_inventory_slots: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_range: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_restrictions: Option<WeaponRestriction>,
}

impl StatModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agility(mut self, value: i32) -> Self {
        self.agility = Some(value);
        self
    }

    pub fn with_presence(mut self, value: i32) -> Self {
        self.presence = Some(value);
        self
    }

    pub fn with_strength(mut self, value: i32) -> Self {
        self.strength = Some(value);
        self
    }

    pub fn with_toughness(mut self, value: i32) -> Self {
        self.toughness = Some(value);
        self
    }

    pub fn with_armour(mut self, value: i32) -> Self {
        self.armour = Some(value);
        self
    }

    pub fn with_hp(mut self, value: i32) -> Self {
        self.hp = Some(value);
        self
    }

    pub fn with_extra_inventory_slots(mut self, value: i32) -> Self {
        self.extra_inventory_slots = Some(value);
        self
    }

    pub fn with_max_range(mut self, value: i32) -> Self {
        self.max_range = Some(value);
        self
    }

    pub fn with_weapon_restrictions(mut self, restriction: WeaponRestriction) -> Self {
        self.weapon_restrictions = Some(restriction);
        self
    }

    /// Inventory delta granted (or taken) by this entry, zero when absent.
    pub fn inventory_delta(&self) -> i32 {
        self.extra_inventory_slots.unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Derived character attributes after equipment and modifiers are applied.
///
/// `armour`, `hp`, `equipment_slots` and `max_range` are deltas on top of the
/// character's base values; the four stats are absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifiedStats {
    pub agility: i32,
    pub presence: i32,
    pub strength: i32,
    pub toughness: i32,
    pub armour: i32,
    pub hp: i32,
    pub equipment_slots: i32,
    pub max_range: i32,
    pub weapon_restrictions: Option<WeaponRestriction>,
}

impl ModifiedStats {
    /// Fold one catalog entry's modifiers in.
    ///
    /// Numeric fields accumulate; the weapon restriction is overwritten.
    pub fn apply(&mut self, modifiers: &StatModifiers) {
        self.agility += modifiers.agility.unwrap_or(0);
        self.presence += modifiers.presence.unwrap_or(0);
        self.strength += modifiers.strength.unwrap_or(0);
        self.toughness += modifiers.toughness.unwrap_or(0);
        self.armour += modifiers.armour.unwrap_or(0);
        self.hp += modifiers.hp.unwrap_or(0);
        self.equipment_slots += modifiers.inventory_delta();
        self.max_range += modifiers.max_range.unwrap_or(0);
        if let Some(restriction) = modifiers.weapon_restrictions {
            self.weapon_restrictions = Some(restriction);
        }
    }
}
