//! Turn resolution for the combat state machine.

use rand::Rng;

use crate::core::constants::{
    ARMOR_DAMAGE_REDUCTION, UNARMED_DAMAGE_MAX, UNARMED_DAMAGE_MIN, WEAPON_DAMAGE_MAX,
    WEAPON_DAMAGE_MIN,
};
use crate::core::game_state::GameState;
use crate::core::money::round_cents;
use crate::items::inventory::{decay_equipped, equipped_item};
use crate::items::types::EquipSlot;

use super::types::{CombatAction, CombatEvent, CombatStatus, Encounter};

/// Advances the encounter by exactly one turn and returns its events in
/// order.
///
/// Victory settles before retaliation, so a killing blow is never answered.
/// The breaking swing of a weapon still rolls weapon damage, and armor
/// wears down even when it absorbs a hit completely. On defeat the player's
/// hp is left where it fell (possibly negative) for the revival flow to
/// reset. Calling on a finished encounter does nothing.
pub fn resolve_turn(
    state: &mut GameState,
    encounter: &mut Encounter,
    action: CombatAction,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    if encounter.is_over() {
        return events;
    }

    if action == CombatAction::Flee {
        encounter.finish(CombatStatus::Fled);
        events.push(CombatEvent::PlayerFled);
        return events;
    }

    // Player swing
    let armed = equipped_item(state, EquipSlot::Weapon).is_some();
    let damage = if armed {
        rng.gen_range(WEAPON_DAMAGE_MIN..=WEAPON_DAMAGE_MAX)
    } else {
        rng.gen_range(UNARMED_DAMAGE_MIN..=UNARMED_DAMAGE_MAX)
    };
    events.push(CombatEvent::PlayerAttack { damage });
    if armed {
        if let Some(name) = decay_equipped(state, EquipSlot::Weapon) {
            events.push(CombatEvent::WeaponBroke { name });
        }
    }

    encounter.monster_hp -= damage as i32;
    if encounter.monster_hp <= 0 {
        let reward = encounter.monster.money;
        state.player_gold = round_cents(state.player_gold + reward);
        encounter.finish(CombatStatus::Victory);
        events.push(CombatEvent::MonsterDefeated { reward });
        return events;
    }

    // Retaliation
    let mut taken = encounter.monster.power;
    let armored = equipped_item(state, EquipSlot::Armor).is_some();
    if armored {
        taken = taken.saturating_sub(ARMOR_DAMAGE_REDUCTION);
    }
    state.player_hp -= taken as i32;
    events.push(CombatEvent::MonsterAttack { damage: taken });
    if armored {
        if let Some(name) = decay_equipped(state, EquipSlot::Armor) {
            events.push(CombatEvent::ArmorBroke { name });
        }
    }

    if state.player_hp <= 0 {
        encounter.finish(CombatStatus::Defeat);
        events.push(CombatEvent::PlayerDefeated);
    }

    events
}
