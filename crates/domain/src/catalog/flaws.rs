//! Flaw table.

use crate::entities::Modifier;
use crate::value_objects::StatModifiers;

pub(super) fn flaws() -> Vec<Modifier> {
    vec![
        Modifier::new("Cursed", "Roll two more times and apply all results"),
        Modifier::new("Gammy foot", "Suffer -1 to all movement")
            .with_modifiers(StatModifiers::new().with_agility(-1)),
        Modifier::new("Brittle bones", "+1 to damage when hit"),
        Modifier::new(
            "Putrid smell",
            "All models within 3 inches suffer -1 to Presence tests",
        ),
        Modifier::new("Weak hands", "Can only wield one weapons"),
        Modifier::new("Greasy hands", "Suffer -1 to Agility tests"),
        Modifier::new("One eyed", "Suffer -1 on all ranged attacks and all spells"),
        Modifier::new("Malnutrition", "-1 on all Strength based tests"),
        Modifier::new("Scared of heights", "Cannot jump or climb"),
        Modifier::new(
            "Angry",
            "If non-friendly model is withing line of sight, you must move towards them and make an attack if possible",
        ),
        Modifier::new(
            "Vacant mind",
            "Uncaring for the real world, they never collect treasure or items from the battlefield",
        ),
        Modifier::new("Weak bodied", "-1 HP").with_modifiers(StatModifiers::new().with_hp(-1)),
        Modifier::new("Allergic to metal", "Cannot wear armour"),
        Modifier::new("Squeamish", "-1 DMG dealt to others"),
        Modifier::new("Slow learner", "+1 XP required to level up"),
        Modifier::new(
            "Loner",
            "-1 on all tests when within 2 inches of a friendly model",
        ),
        Modifier::new("Scared of monsters", "-1 to attack monsters and beasts"),
        Modifier::new("Realist", "Models cannot use Omens"),
        Modifier::new(
            "Poor morale",
            "Whenever they take damage they make a morale roll",
        ),
        Modifier::new("The best is yet to come", "Do not pick a Feat for this model"),
    ]
}
