use serde::{Deserialize, Serialize};

use crate::core::constants::{SAVE_VERSION, STARTING_GOLD, STARTING_HP, STARTING_MAX_HP};
use crate::items::{Item, ItemId};

/// Full session state: the single owner of the player's progress.
///
/// Equipped slots hold stable item ids referencing entries of
/// `player_inventory`; equipping never copies or removes the item itself.
/// Every field defaults to its new-game value so records written by older
/// versions keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub player_name: String,
    #[serde(default = "default_hp")]
    pub player_hp: i32,
    #[serde(default = "default_gold")]
    pub player_gold: f64,
    #[serde(default = "default_max_hp")]
    pub max_hp: i32,
    #[serde(default)]
    pub player_inventory: Vec<Item>,
    #[serde(default)]
    pub equipped_weapon: Option<ItemId>,
    #[serde(default)]
    pub equipped_armor: Option<ItemId>,
    #[serde(default)]
    pub doctor_visits: u32,
    #[serde(default = "default_save_version")]
    pub save_version: u32,
}

fn default_hp() -> i32 {
    STARTING_HP
}

fn default_gold() -> f64 {
    STARTING_GOLD
}

fn default_max_hp() -> i32 {
    STARTING_MAX_HP
}

fn default_save_version() -> u32 {
    SAVE_VERSION
}

impl GameState {
    /// Creates a fresh session with new-game defaults.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            player_hp: STARTING_HP,
            player_gold: STARTING_GOLD,
            max_hp: STARTING_MAX_HP,
            player_inventory: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
            doctor_visits: 0,
            save_version: SAVE_VERSION,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.player_hp > 0
    }

    /// Looks up an inventory item by id.
    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.player_inventory.iter().find(|item| item.id == id)
    }

    pub(crate) fn find_item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.player_inventory.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::new("Haley");
        assert_eq!(state.player_name, "Haley");
        assert_eq!(state.player_hp, 30);
        assert_eq!(state.player_gold, 10.0);
        assert_eq!(state.max_hp, 30);
        assert!(state.player_inventory.is_empty());
        assert!(state.equipped_weapon.is_none());
        assert!(state.equipped_armor.is_none());
        assert_eq!(state.doctor_visits, 0);
        assert_eq!(state.save_version, SAVE_VERSION);
        assert!(state.is_alive());
    }

    #[test]
    fn test_find_item_by_id() {
        let mut state = GameState::new("Finder");
        let item = Item::new(
            "Iron Sword",
            10.0,
            ItemKind::Weapon {
                max_durability: 6,
                current_durability: 6,
            },
        );
        let id = item.id;
        state.player_inventory.push(item);

        assert_eq!(state.find_item(id).map(|i| i.name.as_str()), Some("Iron Sword"));
        assert!(state.find_item(ItemId::new_v4()).is_none());
    }

    #[test]
    fn test_is_alive_at_zero_hp() {
        let mut state = GameState::new("Fallen");
        state.player_hp = 0;
        assert!(!state.is_alive());
        state.player_hp = -3;
        assert!(!state.is_alive());
    }
}
