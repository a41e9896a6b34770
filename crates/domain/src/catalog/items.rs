//! Equipment table.

use crate::entities::Item;

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new("Bandages", 1).with_description("Used to stop bleeding condition"),
        Item::new("Lantern", 3).with_description("Used to see in the dark"),
        Item::new("Torch", 1).with_description(
            "As a lantern, but only lasts 3 rounds. Can be used as a one handed makeshift weapon",
        ),
        Item::new("Backpack", 1)
            .with_description("Counts as 1 inventory slot, but provides 2 additional slots.")
            .with_extra_inventory_slots(2),
        Item::new("Potion", 6).with_description("Heals D6: Toughness test or become dazed."),
        Item::new("Ammo", 1).with_ammo(5).with_description("5 shots"),
        Item::new("Light Armour", 2).with_armour(1).with_description("+1 Armour"),
        Item::new("Medium Armour", 10).with_armour(2).with_description("+2 Armour"),
        Item::new("Heavy Armour", 20)
            .with_armour(3)
            .with_description("+3 Armour, takes up 2 slots inventory slots"),
        Item::new("Helm", 5).with_description("Cannot be dazed by an attack"),
        Item::new("Shield", 2)
            .with_description("Can be destroyed to ignore 1 attack after all rolls"),
        Item::new("One Handed Makeshift Weapon", 0).with_description(
            "Damage: D4. Modifier: Strength. Special: Could be a piece of bone, debris or rock",
        ),
        Item::new("Staff", 1).with_description("Damage: D4, Modifier: Agility"),
        Item::new("Shortsword", 2).with_description("Damage: D6, Modifier: Agility"),
        Item::new("Dagger", 1).with_description("Damage: D4, Modifier: Agility"),
        Item::new("Warhammer", 4)
            .with_description("Damage: D6, Modifier: Strength, Special: Critical causes dazed."),
        Item::new("Sword", 4)
            .with_description("Damage: D6, Modifier: Strength, Special: Critical causes dazed."),
        Item::new("Rapier", 4)
            .with_description("Damage: D6, Modifier: Agility, Special: Critical disarms enemy."),
        Item::new("Fists", 0).with_description(
            "Damage: 1, Modifier: Strength, Special: Fumble - You take 1 damage, takes up 0 slots",
        ),
        Item::new("Hand Axe", 3)
            .with_description("Damage: D8, Modifier: Strength, Special: Thrown"),
        Item::new("Ulfberht Sword", 5)
            .with_description("Damage: D8, Modifier: Strength, Special: Critical causes bleeding"),
        Item::new("Morning Star", 7).with_description(
            "Damage: D8, Modifier: Strength, Special: Cruel and critical causes bleeding",
        ),
        Item::new("Horseman's Pick", 4)
            .with_description("Damage: D6, Modifier: Strength, Special: Cruel"),
        Item::new("Flail", 5)
            .with_description("Damage: D8, Modifier: Strength, Special: Critical causes bleeding"),
        Item::new("Two Handed Makeshift Weapon", 0)
            .with_description(
                "Damage: D6, Modifier: Strength, Special: Could be a piece of bone, debris or rock",
            )
            .two_handed(),
        Item::new("Bow", 5)
            .with_ammo(3)
            .with_description("Damage: D6, Modifier: Presence, Special: Comes with 5 arrows, ranged")
            .two_handed(),
        Item::new("Crossbow", 8)
            .with_ammo(5)
            .with_description(
                "Damage: D6, Modifier: Presence, Special: Comes with 5 bolts, reload, cruel, ranged",
            )
            .two_handed(),
        Item::new("Bastard Sword", 10)
            .with_description(
                "Damage: D10, Modifier: Strength, Special: On critical, can choose to break enemies weapon.",
            )
            .two_handed(),
        Item::new("Great Axe", 10)
            .with_description(
                "Damage: D10, Modifier: Strength, Special: Critical breaks enemy shield and damages",
            )
            .two_handed(),
        Item::new("Glaive", 8)
            .with_description("Damage: D8, Modifier: Strength, Special: Reach")
            .two_handed(),
        Item::new("Spear", 8)
            .with_description("Damage: D6, Modifier: Agility, Special: Reach and thrown")
            .two_handed(),
    ]
}
