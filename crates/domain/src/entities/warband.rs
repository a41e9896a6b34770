//! Warband entity - a player's roster plus shared gold, xp and notes.

use serde::{Deserialize, Serialize};

use super::Character;

/// Gold a brand-new warband starts with.
pub const STARTING_GOLD: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarbandData {
    pub warband_name: String,
    pub characters: Vec<Character>,
    pub gold: u32,
    pub xp: u32,
    pub notes: String,
}

impl Default for WarbandData {
    fn default() -> Self {
        Self {
            warband_name: String::new(),
            characters: Vec::new(),
            gold: STARTING_GOLD,
            xp: 0,
            notes: String::new(),
        }
    }
}

impl WarbandData {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            warband_name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_characters(mut self, characters: Vec<Character>) -> Self {
        self.characters = characters;
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn character(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }
}
