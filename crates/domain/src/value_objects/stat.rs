//! Stat value object - the four base attributes of a warband character.
//!
//! Provides type safety for stat references instead of passing field names around.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base attribute of a character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Movement, finesse weapons, dodging
    Agility,
    /// Ranged attacks, spells, morale
    Presence,
    /// Heavy weapons; also sets base inventory size
    Strength,
    /// Endurance; also sets base HP
    Toughness,
}

impl Stat {
    /// Returns the lowercase key used in persisted documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agility => "agility",
            Self::Presence => "presence",
            Self::Strength => "strength",
            Self::Toughness => "toughness",
        }
    }

    /// Returns the capitalized name shown on a sheet.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Agility => "Agility",
            Self::Presence => "Presence",
            Self::Strength => "Strength",
            Self::Toughness => "Toughness",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Stat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "agility" | "agi" => Ok(Self::Agility),
            "presence" | "pre" => Ok(Self::Presence),
            "strength" | "str" => Ok(Self::Strength),
            "toughness" | "tou" => Ok(Self::Toughness),
            _ => Err(()),
        }
    }
}
