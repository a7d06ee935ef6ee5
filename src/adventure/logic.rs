//! Encounter orchestration: monster generation, the consumable shortcut,
//! the combat loop, and the doctor's revival economy.

use rand::Rng;

use crate::combat::{resolve_turn, CombatAction, CombatEvent, CombatStatus, Encounter};
use crate::core::constants::{REVIVAL_FEE, REVIVAL_HP};
use crate::core::game_state::GameState;
use crate::core::money::round_cents;
use crate::decision::DecisionProvider;
use crate::error::GameError;
use crate::items::inventory::remove_item;
use crate::items::types::{ItemCategory, ItemId};
use crate::monster::{generate_monster, MonsterArchetype};

use super::types::{EncounterOutcome, EncounterResult};

/// Runs one complete encounter against a freshly generated monster.
///
/// If the inventory holds a consumable, the first one is offered as an
/// instant win before combat: using it removes the item, awards the
/// monster's gold, and leaves hp untouched. Otherwise the combat engine
/// loops, asking `decider` for an action each turn, until a terminal
/// state. A defeat always ends in revival: hp back to the doctor's floor,
/// the first visit free, every later one billed flat. Gold may go
/// negative.
pub fn resolve_encounter(
    state: &mut GameState,
    roster: &[MonsterArchetype],
    decider: &mut dyn DecisionProvider,
    rng: &mut impl Rng,
) -> Result<EncounterOutcome, GameError> {
    let monster = generate_monster(roster, rng);
    let mut events = Vec::new();

    if let Some((id, name)) = first_consumable(state) {
        let prompt = format!(
            "A {} blocks your path. {}",
            monster.name, monster.description
        );
        let options = vec!["Fight it".to_string(), format!("Use the {}", name)];
        match decider.choose(&prompt, &options) {
            0 => {}
            1 => {
                let reward = monster.money;
                remove_item(state, id);
                state.player_gold = round_cents(state.player_gold + reward);
                events.push(CombatEvent::ConsumableUsed { name, reward });
                return Ok(EncounterOutcome {
                    monster_name: monster.name,
                    monster_description: monster.description,
                    result: EncounterResult::Victory { instant: true },
                    gold_earned: reward,
                    events,
                });
            }
            _ => return Err(GameError::InvalidSelection),
        }
    }

    let mut encounter = Encounter::new(monster);
    while !encounter.is_over() {
        let action = choose_action(state, &encounter, decider)?;
        events.extend(resolve_turn(state, &mut encounter, action, rng));
    }

    let status = encounter.status();
    let monster = encounter.monster;
    let (result, gold_earned) = match status {
        CombatStatus::Victory => (EncounterResult::Victory { instant: false }, monster.money),
        CombatStatus::Fled => (EncounterResult::Fled, 0.0),
        CombatStatus::Defeat => {
            let fee = revive(state);
            events.push(CombatEvent::DoctorRevival { fee });
            (EncounterResult::Revived { fee }, 0.0)
        }
        CombatStatus::InProgress => unreachable!("combat loop exits only on a terminal status"),
    };

    Ok(EncounterOutcome {
        monster_name: monster.name,
        monster_description: monster.description,
        result,
        gold_earned,
        events,
    })
}

/// Carries a fallen player back to the doctor.
///
/// Hp is restored to the doctor's floor; the first-ever visit is free and
/// every later one costs the flat fee, with no lower bound on gold.
/// Returns the fee charged.
pub fn revive(state: &mut GameState) -> f64 {
    state.doctor_visits += 1;
    state.player_hp = REVIVAL_HP;
    if state.doctor_visits == 1 {
        0.0
    } else {
        state.player_gold = round_cents(state.player_gold - REVIVAL_FEE);
        REVIVAL_FEE
    }
}

fn choose_action(
    state: &GameState,
    encounter: &Encounter,
    decider: &mut dyn DecisionProvider,
) -> Result<CombatAction, GameError> {
    let prompt = format!(
        "Your HP: {} | {} HP: {}",
        state.player_hp, encounter.monster.name, encounter.monster_hp
    );
    let options = vec!["Attack".to_string(), "Run away".to_string()];
    match decider.choose(&prompt, &options) {
        0 => Ok(CombatAction::Attack),
        1 => Ok(CombatAction::Flee),
        _ => Err(GameError::InvalidSelection),
    }
}

fn first_consumable(state: &GameState) -> Option<(ItemId, String)> {
    state
        .player_inventory
        .iter()
        .find(|item| item.category() == ItemCategory::Consumable)
        .map(|item| (item.id, item.name.clone()))
}
