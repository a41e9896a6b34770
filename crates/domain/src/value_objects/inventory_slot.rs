//! Inventory slots and scroll slot kinds.
//!
//! A slot is either empty, the placeholder of a spellcaster's scroll slot, or
//! occupied by a catalog item name. Persisted documents store slots as plain
//! strings, so the serde representation keeps that shape:
//!
//! | Variant                         | Stored string            |
//! |---------------------------------|--------------------------|
//! | `Empty`                         | `""`                     |
//! | `ScrollPlaceholder(Clean)`      | `"[Clean Scroll Slot]"`  |
//! | `ScrollPlaceholder(Unclean)`    | `"[Unclean Scroll Slot]"`|
//! | `Occupied(name)`                | `name`                   |

use serde::{Deserialize, Serialize};
use std::fmt;

const CLEAN_SCROLL_PLACEHOLDER: &str = "[Clean Scroll Slot]";
const UNCLEAN_SCROLL_PLACEHOLDER: &str = "[Unclean Scroll Slot]";

/// Which of the two reserved spellcaster slots a scroll belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollKind {
    Clean,
    Unclean,
}

impl ScrollKind {
    pub const ALL: [ScrollKind; 2] = [Self::Clean, Self::Unclean];

    /// Slot reserved for this kind while the character is a spellcaster.
    pub fn slot_index(&self) -> usize {
        match self {
            Self::Clean => 0,
            Self::Unclean => 1,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Clean => CLEAN_SCROLL_PLACEHOLDER,
            Self::Unclean => UNCLEAN_SCROLL_PLACEHOLDER,
        }
    }
}

impl fmt::Display for ScrollKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Unclean => write!(f, "unclean"),
        }
    }
}

/// Contents of one inventory slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InventorySlot {
    #[default]
    Empty,
    ScrollPlaceholder(ScrollKind),
    Occupied(String),
}

impl InventorySlot {
    /// Slot holding `name`; an empty name yields an empty slot.
    pub fn item(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Item name held by the slot, if any. Placeholders hold no item.
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Self::Occupied(name) => Some(name),
            _ => None,
        }
    }

    /// True when the slot holds exactly `name`.
    pub fn holds(&self, name: &str) -> bool {
        self.item_name() == Some(name)
    }

    /// The persisted string form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::ScrollPlaceholder(kind) => kind.placeholder(),
            Self::Occupied(name) => name,
        }
    }
}

impl From<String> for InventorySlot {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" => Self::Empty,
            CLEAN_SCROLL_PLACEHOLDER => Self::ScrollPlaceholder(ScrollKind::Clean),
            UNCLEAN_SCROLL_PLACEHOLDER => Self::ScrollPlaceholder(ScrollKind::Unclean),
            _ => Self::Occupied(value),
        }
    }
}

impl From<&str> for InventorySlot {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<InventorySlot> for String {
    fn from(slot: InventorySlot) -> String {
        match slot {
            InventorySlot::Occupied(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for InventorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_legacy_strings() {
        assert_eq!(InventorySlot::from(""), InventorySlot::Empty);
        assert_eq!(
            InventorySlot::from("[Unclean Scroll Slot]"),
            InventorySlot::ScrollPlaceholder(ScrollKind::Unclean)
        );
        assert_eq!(
            InventorySlot::from("Sword"),
            InventorySlot::Occupied("Sword".to_string())
        );
    }

    #[test]
    fn placeholders_hold_no_item() {
        let slot = InventorySlot::ScrollPlaceholder(ScrollKind::Clean);
        assert_eq!(slot.item_name(), None);
        assert!(!slot.is_empty());
        assert_eq!(slot.as_str(), "[Clean Scroll Slot]");
    }

    #[test]
    fn serializes_as_plain_strings() {
        let slots = vec![
            InventorySlot::item("Bow"),
            InventorySlot::Empty,
            InventorySlot::ScrollPlaceholder(ScrollKind::Clean),
        ];
        let json = serde_json::to_string(&slots).unwrap();
        assert_eq!(json, r#"["Bow","","[Clean Scroll Slot]"]"#);

        let parsed: Vec<InventorySlot> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slots);
    }

    #[test]
    fn scroll_kinds_map_to_reserved_slots() {
        assert_eq!(ScrollKind::Clean.slot_index(), 0);
        assert_eq!(ScrollKind::Unclean.slot_index(), 1);
    }
}
