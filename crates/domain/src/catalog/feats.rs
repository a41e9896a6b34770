//! Feat table.

use crate::entities::Modifier;
use crate::value_objects::StatModifiers;

pub(super) fn feats() -> Vec<Modifier> {
    vec![
        Modifier::new(
            "Intimidating Presence",
            "A single enemy model you can see within 6 inches must make a Presence test. If failed, you may make a full move with that model as if it was yours or drop one of its weapons",
        ),
        Modifier::new("Slippery when wet", "Model can always leave combat"),
        Modifier::new(
            "Cowardly",
            "Model gets a -1 on all morale tests but gains +1 Agility",
        )
        .with_modifiers(StatModifiers::new().with_agility(1)),
        Modifier::new(
            "Meathead",
            "Model is stronger than they are smart, +2 Strength, -1 Presence",
        )
        .with_modifiers(StatModifiers::new().with_strength(2).with_presence(-1)),
        Modifier::new(
            "Mind over matter",
            "Model can make a Presence test to ignore D4 damage each time they are hit",
        ),
        Modifier::new(
            "Through gritted teeth",
            "Model can make a Presence test to avoid being downed ONCE per encounter, they remain standing on 1 HP",
        ),
        Modifier::new("Revolting appearance", "Enemies suffer -1 to hit this model"),
        Modifier::new(
            "What we do in the shadows",
            "Model can heal by drinking blood of others. Make a melee attack and heal damage dealt. Gain TEETH:D4, AGILITY BASED: CRUEL",
        ),
        Modifier::new(
            "Hard to see",
            "Model cannot be targeted by enemy ranged attacks, and can not make ranged attacks itself. Spells work as usual.",
        ),
        Modifier::new("Tough as nails", "+2 HP, -1 Agility")
            .with_modifiers(StatModifiers::new().with_toughness(2).with_agility(-1)),
        Modifier::new(
            "Scavenger",
            "Roll twice on treasure tables when searching and take both, if they have sufficient equipment slots free. Extra items are placed on ground as per treasure rules",
        ),
        Modifier::new("Bark skin", "+1 Armour from tough skin, -1 Agility")
            .with_modifiers(StatModifiers::new().with_armour(1).with_agility(-1)),
        Modifier::new(
            "Clawed nails",
            "Replace fists with Claws. Claws: D6, Agility based.",
        )
        .with_modifiers(StatModifiers::new().with_agility(1)),
        Modifier::new(
            "Swindler",
            "At the end of the scenario, if they survive, gain one free roll on the treasure table.",
        ),
        Modifier::new(
            "Medic",
            "Can make a Presence test to heal one downed model, model is restored to 1HP and returns to the fight.",
        ),
        Modifier::new(
            "Improvised fighter",
            "Model can make a makeshift one handed weapon when out in the field.",
        ),
        Modifier::new(
            "Shield bash",
            "Model equipped with a shield deals an additional 2 damage in melee.",
        ),
        Modifier::new(
            "Lucky goblin foot",
            "Model can reroll 1 dice roll per scenario but has -1 equipment slot.",
        )
        .with_modifiers(StatModifiers::new().with_extra_inventory_slots(-1)),
        Modifier::new(
            "Charge",
            "Model can move twice its movement value but must end within an inch of an enemy.",
        ),
        Modifier::new(
            "Feint / Disarm",
            "Instead of making an attack during a close combat attack, make an Agility test to feint the enemy's attack, preventing a successful hit. If the enemy also fails to hit they are considered to have dropped their weapon and are disarmed.",
        ),
    ]
}
