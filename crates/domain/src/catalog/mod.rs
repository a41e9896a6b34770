//! Static rule tables: items, feats, flaws, injuries and scrolls.
//!
//! The standard tables are built once per process and only ever handed out
//! by shared reference. House-rule tables are assembled through
//! [`CatalogBuilder`], which rejects duplicate names instead of letting a
//! later entry shadow an earlier one.
//!
//! ```
//! use warband_domain::catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//! assert_eq!(catalog.item("Bow").and_then(|item| item.ammo), Some(3));
//! ```

mod feats;
mod flaws;
mod injuries;
mod items;
mod scrolls;

use std::sync::LazyLock;

use crate::entities::{Item, Modifier, ModifierKind, Scroll};
use crate::error::DomainError;
use crate::value_objects::ScrollKind;

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    items: items::items(),
    feats: feats::feats(),
    flaws: flaws::flaws(),
    injuries: injuries::injuries(),
    clean_scrolls: scrolls::clean_scrolls(),
    unclean_scrolls: scrolls::unclean_scrolls(),
});

/// Read-only lookup tables consulted by every rule function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    feats: Vec<Modifier>,
    flaws: Vec<Modifier>,
    injuries: Vec<Modifier>,
    clean_scrolls: Vec<Scroll>,
    unclean_scrolls: Vec<Scroll>,
}

impl Catalog {
    /// The game's standard tables.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Empty builder for fully custom tables.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Builder seeded with this catalog's entries, for extending it.
    pub fn to_builder(&self) -> CatalogBuilder {
        CatalogBuilder {
            catalog: self.clone(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn modifiers(&self, kind: ModifierKind) -> &[Modifier] {
        match kind {
            ModifierKind::Feat => &self.feats,
            ModifierKind::Flaw => &self.flaws,
            ModifierKind::Injury => &self.injuries,
        }
    }

    pub fn scrolls(&self, kind: ScrollKind) -> &[Scroll] {
        match kind {
            ScrollKind::Clean => &self.clean_scrolls,
            ScrollKind::Unclean => &self.unclean_scrolls,
        }
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Catalog cost of `name`; unknown names cost nothing.
    pub fn item_cost(&self, name: &str) -> u32 {
        self.item(name).map_or(0, |item| item.cost)
    }

    pub fn modifier(&self, kind: ModifierKind, name: &str) -> Option<&Modifier> {
        self.modifiers(kind).iter().find(|entry| entry.name == name)
    }

    pub fn scroll(&self, name: &str) -> Option<&Scroll> {
        self.clean_scrolls
            .iter()
            .chain(&self.unclean_scrolls)
            .find(|scroll| scroll.name == name)
    }

    pub fn scroll_kind(&self, name: &str) -> Option<ScrollKind> {
        self.scroll(name).map(|scroll| scroll.kind)
    }

    pub fn is_clean_scroll(&self, name: &str) -> bool {
        self.scroll_kind(name) == Some(ScrollKind::Clean)
    }

    pub fn is_unclean_scroll(&self, name: &str) -> bool {
        self.scroll_kind(name) == Some(ScrollKind::Unclean)
    }

    fn contains_name(&self, name: &str) -> bool {
        self.item(name).is_some()
            || self.feats.iter().any(|entry| entry.name == name)
            || self.flaws.iter().any(|entry| entry.name == name)
            || self.injuries.iter().any(|entry| entry.name == name)
            || self.scroll(name).is_some()
    }
}

/// Registration path for custom catalog entries.
///
/// Names must be unique across the whole catalog, since inventory slots and
/// modifier lists refer to entries by name only.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn register_item(mut self, item: Item) -> Result<Self, DomainError> {
        self.ensure_unique(&item.name)?;
        self.catalog.items.push(item);
        Ok(self)
    }

    pub fn register_feat(self, feat: Modifier) -> Result<Self, DomainError> {
        self.register_modifier(ModifierKind::Feat, feat)
    }

    pub fn register_flaw(self, flaw: Modifier) -> Result<Self, DomainError> {
        self.register_modifier(ModifierKind::Flaw, flaw)
    }

    pub fn register_injury(self, injury: Modifier) -> Result<Self, DomainError> {
        self.register_modifier(ModifierKind::Injury, injury)
    }

    pub fn register_modifier(
        mut self,
        kind: ModifierKind,
        modifier: Modifier,
    ) -> Result<Self, DomainError> {
        self.ensure_unique(&modifier.name)?;
        let table = match kind {
            ModifierKind::Feat => &mut self.catalog.feats,
            ModifierKind::Flaw => &mut self.catalog.flaws,
            ModifierKind::Injury => &mut self.catalog.injuries,
        };
        table.push(modifier);
        Ok(self)
    }

    pub fn register_scroll(mut self, scroll: Scroll) -> Result<Self, DomainError> {
        self.ensure_unique(&scroll.name)?;
        match scroll.kind {
            ScrollKind::Clean => self.catalog.clean_scrolls.push(scroll),
            ScrollKind::Unclean => self.catalog.unclean_scrolls.push(scroll),
        }
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }

    fn ensure_unique(&self, name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("Catalog entry name cannot be empty"));
        }
        if self.catalog.contains_name(name) {
            return Err(DomainError::constraint(format!(
                "Catalog already contains an entry named '{name}'"
            )));
        }
        Ok(())
    }
}
