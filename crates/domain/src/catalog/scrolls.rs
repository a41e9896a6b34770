//! Clean and unclean scroll tables.

use crate::entities::Scroll;

pub(super) fn clean_scrolls() -> Vec<Scroll> {
    vec![
        Scroll::clean(
            "Hopes Last Breath",
            "Heal D6 HP on one model you are within 1 inch of. Does not work on downed models.",
        ),
        Scroll::clean(
            "Will of the Optimistic",
            "Target model adds an extra D6 to the next test they make.",
        ),
        Scroll::clean("Not Dead Yet", "A dead model is awakened with 1HP and a new Flaw."),
        Scroll::clean(
            "Second Wind",
            "Target creature gains 1 D6 extra HP until the end of the Scenario. Reduce casters HP by 2 each time it is cast. Does not work on downed models or the caster.",
        ),
        Scroll::clean(
            "Visions of Tomorrow",
            "Target models must flee as per morale rules.",
        ),
        Scroll::clean(
            "Shield of Faithless",
            "Model cannot be targeted by ranged attacks for 1 round.",
        ),
        Scroll::clean(
            "False Dawn",
            "Target model produces light as if they had a lantern, lasts 5 rounds.",
        ),
        Scroll::clean(
            "Mind Blast",
            "Target model must pass a Presence test or is dazed for 1 round.",
        ),
        Scroll::clean(
            "Golden Flare",
            "Target model must pass a Presence test or is blinded for 1 round.",
        ),
        Scroll::clean(
            "Obey",
            "Target creature must obey one command, taking one action or movement. The action must be one the target can complete. One a failure, the caster instead performs the command if it can, but under the control of the other player. Speak the command before rolling the dice.",
        ),
    ]
}

pub(super) fn unclean_scrolls() -> Vec<Scroll> {
    vec![
        Scroll::unclean(
            "Flaming Hands of St Vilmarex",
            "Caster hurls a ball of fire at an enemy it can see, dealing D6 damage - cruel.",
        ),
        Scroll::unclean(
            "Mindless Eye",
            "The target creature becomes deranged and must make a Presence test or attack the nearest model.",
        ),
        Scroll::unclean(
            "Invisible Hands",
            "Can move an object (dropped weapon or treasure) D12 inches.",
        ),
        Scroll::unclean(
            "Ungrounded",
            "Target creature can hover for 1 round, ignores all terrain features and moves at twice normal speed.",
        ),
        Scroll::unclean(
            "Breath of the Undying",
            "Target creature begins to suffocate and takes D4 damage when activated. Must make a Presence test as an action to remove the effect.",
        ),
        Scroll::unclean(
            "One Eyed King",
            "Target creature becomes invisible and cannot be targeted by any attack or spell. Target is ignored by monsters. Lasts until creature makes a test of any kind",
        ),
        Scroll::unclean(
            "Bones, Them Damn Bones",
            "A Skeleton appears at a target point on the table, it always fights the nearest model but never attacks the caster. On a failure to cast it still appears but always moves towards and attacks the caster. If caster dies, it leaves.",
        ),
        Scroll::unclean(
            "Eternal Sleep",
            "Target creature makes a Presence test and falls asleep on a failure. Wakes up if they take any damage. Friendly models can wake them up as an action within 1 inch.",
        ),
        Scroll::unclean(
            "Ride the Lightning",
            "Caster produces lightning and strikes a target within 12 inches. Deals D6 damage. Ignores armour.",
        ),
        Scroll::unclean(
            "Doom",
            "All models and creatures withing 12 inches, including allies and caster, must make a Presence test, on failure take D10 damage, ignoring armour. Any failure to cast this scroll is considered a fumble.",
        ),
    ]
}
