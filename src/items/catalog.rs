//! Fixed shop stock.
//!
//! Purchasing copies an entry into the inventory as a fresh item with its
//! own id and full durability; the catalog itself is never mutated.

use super::types::{Item, ItemKind};

/// What a catalog entry turns into when bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Weapon { durability: u32 },
    Armor { durability: u32 },
    Consumable { note: &'static str },
}

/// One line of shop stock.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub price: f64,
    pub kind: CatalogKind,
}

impl CatalogEntry {
    /// Mints a fresh, fully-owned item from this entry.
    pub fn to_item(&self) -> Item {
        let kind = match self.kind {
            CatalogKind::Weapon { durability } => ItemKind::Weapon {
                max_durability: durability,
                current_durability: durability,
            },
            CatalogKind::Armor { durability } => ItemKind::Armor {
                max_durability: durability,
                current_durability: durability,
            },
            CatalogKind::Consumable { note } => ItemKind::Consumable {
                note: Some(note.to_string()),
            },
        };
        Item::new(self.name, self.price, kind)
    }
}

/// The town shop's stock list.
pub const SHOP_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Iron Sword",
        price: 10.0,
        kind: CatalogKind::Weapon { durability: 6 },
    },
    CatalogEntry {
        name: "Oak Shield",
        price: 15.0,
        kind: CatalogKind::Armor { durability: 8 },
    },
    CatalogEntry {
        name: "Padded Vest",
        price: 8.0,
        kind: CatalogKind::Armor { durability: 4 },
    },
    CatalogEntry {
        name: "Thunder Scroll",
        price: 20.0,
        kind: CatalogKind::Consumable {
            note: "Instantly defeats any monster.",
        },
    },
];
