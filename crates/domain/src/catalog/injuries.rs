//! Injury table.

use crate::entities::Modifier;
use crate::value_objects::{StatModifiers, WeaponRestriction};

pub(super) fn injuries() -> Vec<Modifier> {
    vec![
        Modifier::new(
            "Broken Bones",
            "Bones are more fragile and prone to breaking. Agility -1.",
        )
        .with_modifiers(StatModifiers::new().with_agility(-1)),
        Modifier::new(
            "Saddened",
            "A deep sadness weighs heavily on the character's mind. Presence -1.",
        )
        .with_modifiers(StatModifiers::new().with_presence(-1)),
        Modifier::new("Weak", "Muscles have weakened and withered. Strength -1.")
            .with_modifiers(StatModifiers::new().with_strength(-1)),
        Modifier::new(
            "Disease",
            "A lingering illness saps the character's health. Toughness -1.",
        )
        .with_modifiers(StatModifiers::new().with_toughness(-1)),
        Modifier::new(
            "Maimed",
            "A debilitating injury permanently reduces maximum health by 1.",
        )
        .with_modifiers(StatModifiers::new().with_hp(-1)),
        Modifier::new(
            "Lost Limb",
            "A missing limb hinders combat prowess and carrying capacity. Cannot use a shield, torch, and weapon at the same time. One-handed weapon only, -1 equipment slots.",
        )
        .with_modifiers(
            StatModifiers::new()
                .with_extra_inventory_slots(-1)
                .with_weapon_restrictions(WeaponRestriction::OneHanded),
        ),
        Modifier::new(
            "Missing Eye",
            "Reduced depth perception affects combat and visual range. Max range for all attacks and abilities is reduced to 3 inches.",
        )
        .with_modifiers(StatModifiers::new().with_max_range(3)),
        Modifier::new(
            "Only a Flesh Wound",
            "A minor injury that has no lasting effects.",
        ),
    ]
}
