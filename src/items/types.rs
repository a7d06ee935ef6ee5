use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity for an inventory item.
///
/// Equipment slots reference items by id rather than by list position or
/// object identity, so references stay unambiguous across serialization.
pub type ItemId = Uuid;

/// The two equippable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

impl EquipSlot {
    /// The item category that fits this slot.
    pub fn category(self) -> ItemCategory {
        match self {
            EquipSlot::Weapon => ItemCategory::Weapon,
            EquipSlot::Armor => ItemCategory::Armor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EquipSlot::Weapon => "weapon",
            EquipSlot::Armor => "armor",
        }
    }
}

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad item classification used for inventory filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
}

/// Per-category item data.
///
/// Serialized with a `type` tag into the flattened item object, matching
/// the save record format: equippables carry durability, consumables carry
/// an optional note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    #[serde(rename_all = "camelCase")]
    Weapon {
        max_durability: u32,
        current_durability: u32,
    },
    #[serde(rename_all = "camelCase")]
    Armor {
        max_durability: u32,
        current_durability: u32,
    },
    Consumable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

/// One fully-owned inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    /// Mints an item with a fresh id.
    pub fn new(name: impl Into<String>, price: f64, kind: ItemKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            kind,
        }
    }

    pub fn category(&self) -> ItemCategory {
        match self.kind {
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Armor { .. } => ItemCategory::Armor,
            ItemKind::Consumable { .. } => ItemCategory::Consumable,
        }
    }

    pub fn is_equippable(&self) -> bool {
        self.category() != ItemCategory::Consumable
    }

    /// Remaining uses, `None` for consumables.
    pub fn durability(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Weapon {
                current_durability, ..
            }
            | ItemKind::Armor {
                current_durability, ..
            } => Some(current_durability),
            ItemKind::Consumable { .. } => None,
        }
    }

    /// Wears the item down by one use. Returns `true` when the item just
    /// broke (durability reached 0). Consumables never decay.
    pub fn decay(&mut self) -> bool {
        match &mut self.kind {
            ItemKind::Weapon {
                current_durability, ..
            }
            | ItemKind::Armor {
                current_durability, ..
            } => {
                *current_durability = current_durability.saturating_sub(1);
                *current_durability == 0
            }
            ItemKind::Consumable { .. } => false,
        }
    }
}
