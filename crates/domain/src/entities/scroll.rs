//! Scroll entity - a spell a spellcaster carries in a reserved slot.

use serde::{Deserialize, Serialize};

use crate::value_objects::ScrollKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scroll {
    pub name: String,
    pub description: String,
    pub kind: ScrollKind,
}

impl Scroll {
    pub fn new(name: impl Into<String>, kind: ScrollKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn clean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ScrollKind::Clean, description)
    }

    pub fn unclean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, ScrollKind::Unclean, description)
    }
}
