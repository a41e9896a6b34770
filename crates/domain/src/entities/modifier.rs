//! Feats, flaws and injuries.
//!
//! All three share one shape: a unique name, a description and optional stat
//! modifiers. [`ModifierKind`] tells them apart and selects which of the
//! character's name lists an entry lives in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::StatModifiers;

/// Which table a modifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    Feat,
    Flaw,
    Injury,
}

impl ModifierKind {
    /// Application order when aggregating stats.
    pub const ALL: [ModifierKind; 3] = [Self::Feat, Self::Flaw, Self::Injury];
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feat => write!(f, "feat"),
            Self::Flaw => write!(f, "flaw"),
            Self::Injury => write!(f, "injury"),
        }
    }
}

impl FromStr for ModifierKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feat" => Ok(Self::Feat),
            "flaw" => Ok(Self::Flaw),
            "injury" => Ok(Self::Injury),
            _ => Err(()),
        }
    }
}

/// A feat, flaw or injury from the rule tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "StatModifiers::is_empty")]
    pub stat_modifiers: StatModifiers,
}

impl Modifier {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stat_modifiers: StatModifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, stat_modifiers: StatModifiers) -> Self {
        self.stat_modifiers = stat_modifiers;
        self
    }

    /// Inventory delta applied when the modifier is gained.
    pub fn inventory_delta(&self) -> i32 {
        self.stat_modifiers.inventory_delta()
    }
}

/// Name-and-payload pair identifying a modifier to apply or remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierRef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ModifierKind,
}

impl ModifierRef {
    pub fn new(name: impl Into<String>, kind: ModifierKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn feat(name: impl Into<String>) -> Self {
        Self::new(name, ModifierKind::Feat)
    }

    pub fn flaw(name: impl Into<String>) -> Self {
        Self::new(name, ModifierKind::Flaw)
    }

    pub fn injury(name: impl Into<String>) -> Self {
        Self::new(name, ModifierKind::Injury)
    }
}
