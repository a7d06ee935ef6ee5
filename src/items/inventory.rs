//! Inventory and equipment operations.
//!
//! Equipped slots are stable-id references into the inventory list;
//! equipping replaces the reference and never copies or removes the item.
//! Every operation either completes or leaves the state untouched.

use crate::core::game_state::GameState;
use crate::core::money::round_cents;
use crate::decision::DecisionProvider;
use crate::error::GameError;

use super::catalog::CatalogEntry;
use super::types::{EquipSlot, Item, ItemId};

/// Ids of inventory items that fit `slot`, in inventory order.
pub fn eligible_items(state: &GameState, slot: EquipSlot) -> Vec<ItemId> {
    state
        .player_inventory
        .iter()
        .filter(|item| item.category() == slot.category())
        .map(|item| item.id)
        .collect()
}

/// The id currently equipped in `slot`, if any.
pub fn equipped_id(state: &GameState, slot: EquipSlot) -> Option<ItemId> {
    match slot {
        EquipSlot::Weapon => state.equipped_weapon,
        EquipSlot::Armor => state.equipped_armor,
    }
}

/// The item currently equipped in `slot`, if any.
pub fn equipped_item(state: &GameState, slot: EquipSlot) -> Option<&Item> {
    equipped_id(state, slot).and_then(|id| state.find_item(id))
}

fn equipped_slot_mut(state: &mut GameState, slot: EquipSlot) -> &mut Option<ItemId> {
    match slot {
        EquipSlot::Weapon => &mut state.equipped_weapon,
        EquipSlot::Armor => &mut state.equipped_armor,
    }
}

/// Equips the inventory item with `id` into `slot`.
///
/// The previously equipped item stays in the inventory, merely unequipped.
/// Fails with `InvalidSelection` when the id is absent or the item does not
/// fit the slot.
pub fn equip_item(state: &mut GameState, slot: EquipSlot, id: ItemId) -> Result<(), GameError> {
    let fits = matches!(
        state.find_item(id),
        Some(item) if item.category() == slot.category()
    );
    if !fits {
        return Err(GameError::InvalidSelection);
    }
    *equipped_slot_mut(state, slot) = Some(id);
    Ok(())
}

/// Asks the decision provider to pick an eligible item, then equips it.
///
/// Fails with `NoEligibleItem` when nothing in the inventory fits `slot`;
/// the equipped reference is unchanged on any failure.
pub fn choose_and_equip(
    state: &mut GameState,
    slot: EquipSlot,
    decider: &mut dyn DecisionProvider,
) -> Result<ItemId, GameError> {
    let mut candidates = Vec::new();
    let mut labels = Vec::new();
    for item in &state.player_inventory {
        if item.category() == slot.category() {
            candidates.push(item.id);
            labels.push(item_label(item));
        }
    }
    if candidates.is_empty() {
        return Err(GameError::NoEligibleItem(slot));
    }

    let prompt = format!("Choose a {} to equip", slot);
    let pick = decider.choose(&prompt, &labels);
    let id = *candidates.get(pick).ok_or(GameError::InvalidSelection)?;
    equip_item(state, slot, id)?;
    Ok(id)
}

fn item_label(item: &Item) -> String {
    match item.durability() {
        Some(uses) => format!("{} ({} uses left)", item.name, uses),
        None => item.name.clone(),
    }
}

/// Buys `entry` from the shop: deducts the price and appends a fresh copy
/// with full durability. Fails with `InsufficientFunds` when gold does not
/// cover the price, leaving gold and inventory untouched.
pub fn purchase(state: &mut GameState, entry: &CatalogEntry) -> Result<ItemId, GameError> {
    if state.player_gold < entry.price {
        return Err(GameError::InsufficientFunds {
            needed: entry.price,
            available: state.player_gold,
        });
    }
    state.player_gold = round_cents(state.player_gold - entry.price);
    let item = entry.to_item();
    let id = item.id;
    state.player_inventory.push(item);
    Ok(id)
}

/// Removes an item from the inventory, clearing any slot that pointed at it.
pub fn remove_item(state: &mut GameState, id: ItemId) -> Option<Item> {
    let index = state
        .player_inventory
        .iter()
        .position(|item| item.id == id)?;
    if state.equipped_weapon == Some(id) {
        state.equipped_weapon = None;
    }
    if state.equipped_armor == Some(id) {
        state.equipped_armor = None;
    }
    Some(state.player_inventory.remove(index))
}

/// Wears down the equipped item in `slot` by one use.
///
/// When the item breaks it is removed from the inventory and unequipped in
/// the same call, and its name is returned.
pub fn decay_equipped(state: &mut GameState, slot: EquipSlot) -> Option<String> {
    let id = equipped_id(state, slot)?;
    let item = state.find_item_mut(id)?;
    if item.decay() {
        let name = item.name.clone();
        remove_item(state, id);
        return Some(name);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::ScriptedDecisions;
    use crate::items::catalog::SHOP_CATALOG;
    use crate::items::types::ItemKind;

    fn state_with(items: Vec<Item>) -> GameState {
        let mut state = GameState::new("Tester");
        state.player_inventory = items;
        state
    }

    fn sword(durability: u32) -> Item {
        Item::new(
            "Iron Sword",
            10.0,
            ItemKind::Weapon {
                max_durability: 6,
                current_durability: durability,
            },
        )
    }

    fn shield(durability: u32) -> Item {
        Item::new(
            "Oak Shield",
            15.0,
            ItemKind::Armor {
                max_durability: 8,
                current_durability: durability,
            },
        )
    }

    #[test]
    fn test_eligible_items_filters_by_slot() {
        let state = state_with(vec![sword(6), shield(8)]);
        let weapons = eligible_items(&state, EquipSlot::Weapon);
        assert_eq!(weapons.len(), 1);
        assert_eq!(weapons[0], state.player_inventory[0].id);
    }

    #[test]
    fn test_equip_replaces_without_removing() {
        let mut state = state_with(vec![sword(6), sword(3)]);
        let first = state.player_inventory[0].id;
        let second = state.player_inventory[1].id;

        equip_item(&mut state, EquipSlot::Weapon, first).unwrap();
        equip_item(&mut state, EquipSlot::Weapon, second).unwrap();

        assert_eq!(state.equipped_weapon, Some(second));
        assert_eq!(state.player_inventory.len(), 2);
        assert!(state.find_item(first).is_some());
    }

    #[test]
    fn test_equip_rejects_wrong_category() {
        let mut state = state_with(vec![shield(8)]);
        let id = state.player_inventory[0].id;
        let result = equip_item(&mut state, EquipSlot::Weapon, id);
        assert!(matches!(result, Err(GameError::InvalidSelection)));
        assert!(state.equipped_weapon.is_none());
    }

    #[test]
    fn test_choose_and_equip_with_empty_inventory() {
        let mut state = state_with(vec![]);
        let mut decider = ScriptedDecisions::new([0]);
        let result = choose_and_equip(&mut state, EquipSlot::Weapon, &mut decider);
        assert!(matches!(
            result,
            Err(GameError::NoEligibleItem(EquipSlot::Weapon))
        ));
    }

    #[test]
    fn test_choose_and_equip_rejects_out_of_range_answer() {
        let mut state = state_with(vec![sword(6)]);
        let mut decider = ScriptedDecisions::new([7]);
        let result = choose_and_equip(&mut state, EquipSlot::Weapon, &mut decider);
        assert!(matches!(result, Err(GameError::InvalidSelection)));
        assert!(state.equipped_weapon.is_none());
    }

    #[test]
    fn test_choose_and_equip_picks_by_index() {
        let mut state = state_with(vec![sword(6), sword(2)]);
        let second = state.player_inventory[1].id;
        let mut decider = ScriptedDecisions::new([1]);
        let equipped = choose_and_equip(&mut state, EquipSlot::Weapon, &mut decider).unwrap();
        assert_eq!(equipped, second);
        assert_eq!(state.equipped_weapon, Some(second));
    }

    #[test]
    fn test_purchase_deducts_and_appends_fresh_copy() {
        let mut state = GameState::new("Shopper");
        state.player_gold = 25.0;

        let id = purchase(&mut state, &SHOP_CATALOG[0]).unwrap();
        assert_eq!(state.player_gold, 15.0);
        assert_eq!(state.player_inventory.len(), 1);
        let bought = state.find_item(id).unwrap();
        assert_eq!(bought.durability(), Some(6));
    }

    #[test]
    fn test_purchase_insufficient_funds_changes_nothing() {
        let mut state = GameState::new("Broke");
        state.player_gold = 9.99;

        let result = purchase(&mut state, &SHOP_CATALOG[0]);
        assert!(matches!(
            result,
            Err(GameError::InsufficientFunds { .. })
        ));
        assert_eq!(state.player_gold, 9.99);
        assert!(state.player_inventory.is_empty());
    }

    #[test]
    fn test_purchase_at_exact_price_succeeds() {
        let mut state = GameState::new("Exact");
        state.player_gold = 10.0;
        purchase(&mut state, &SHOP_CATALOG[0]).unwrap();
        assert_eq!(state.player_gold, 0.0);
    }

    #[test]
    fn test_remove_item_unequips() {
        let mut state = state_with(vec![sword(6)]);
        let id = state.player_inventory[0].id;
        equip_item(&mut state, EquipSlot::Weapon, id).unwrap();

        let removed = remove_item(&mut state, id).unwrap();
        assert_eq!(removed.id, id);
        assert!(state.equipped_weapon.is_none());
        assert!(state.player_inventory.is_empty());
    }

    #[test]
    fn test_decay_equipped_breaks_at_zero() {
        let mut state = state_with(vec![sword(1)]);
        let id = state.player_inventory[0].id;
        equip_item(&mut state, EquipSlot::Weapon, id).unwrap();

        let broke = decay_equipped(&mut state, EquipSlot::Weapon);
        assert_eq!(broke.as_deref(), Some("Iron Sword"));
        assert!(state.equipped_weapon.is_none());
        assert!(state.player_inventory.is_empty());
    }

    #[test]
    fn test_decay_equipped_survives_above_zero() {
        let mut state = state_with(vec![shield(3)]);
        let id = state.player_inventory[0].id;
        equip_item(&mut state, EquipSlot::Armor, id).unwrap();

        assert!(decay_equipped(&mut state, EquipSlot::Armor).is_none());
        assert_eq!(state.find_item(id).unwrap().durability(), Some(2));
        assert_eq!(state.equipped_armor, Some(id));
    }

    #[test]
    fn test_decay_with_nothing_equipped_is_a_noop() {
        let mut state = state_with(vec![sword(6)]);
        assert!(decay_equipped(&mut state, EquipSlot::Weapon).is_none());
        assert_eq!(state.find_item(state.player_inventory[0].id).unwrap().durability(), Some(6));
    }
}
