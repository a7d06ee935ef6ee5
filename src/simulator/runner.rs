//! Drives simulated playthroughs through the real game core.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::adventure::{resolve_encounter, EncounterResult};
use crate::combat::CombatEvent;
use crate::core::constants::INN_COST;
use crate::core::game_state::GameState;
use crate::decision::DecisionProvider;
use crate::items::catalog::SHOP_CATALOG;
use crate::items::inventory::{choose_and_equip, eligible_items, purchase};
use crate::items::types::EquipSlot;
use crate::monster::DEFAULT_ROSTER;
use crate::town::sleep;

use super::config::SimConfig;
use super::report::{RunStats, SimReport};

/// Rest when hp drops below this and the inn is affordable.
const REST_BELOW_HP: i32 = 15;

/// An adventurer who never retreats: always the first option, which is
/// Attack in combat and Fight at the consumable offer.
struct AggressivePolicy;

impl DecisionProvider for AggressivePolicy {
    fn choose(&mut self, _prompt: &str, _options: &[String]) -> usize {
        0
    }
}

/// Plays `config.num_runs` independent sessions and aggregates the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut runs = Vec::with_capacity(config.num_runs as usize);
    for run_index in 0..config.num_runs {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(run_index as u64));
        runs.push(simulate_run(config, &mut rng));
    }
    SimReport::from_runs(base_seed, runs)
}

fn simulate_run(config: &SimConfig, rng: &mut StdRng) -> RunStats {
    let mut state = GameState::new("Sim Adventurer");
    let mut stats = RunStats::default();
    let mut decider = AggressivePolicy;

    for _ in 0..config.max_turns_per_run {
        // Rest when hurt and solvent.
        if state.player_hp < REST_BELOW_HP
            && state.player_gold >= INN_COST
            && sleep(&mut state).is_ok()
        {
            stats.nights_slept += 1;
            continue;
        }

        // Arm up as soon as a sword is affordable.
        let sword = &SHOP_CATALOG[0];
        if eligible_items(&state, EquipSlot::Weapon).is_empty()
            && state.player_gold >= sword.price
            && purchase(&mut state, sword).is_ok()
        {
            stats.items_bought += 1;
            choose_and_equip(&mut state, EquipSlot::Weapon, &mut decider).ok();
            continue;
        }

        // Otherwise head out of town.
        match resolve_encounter(&mut state, DEFAULT_ROSTER, &mut decider, rng) {
            Ok(outcome) => {
                stats.encounters += 1;
                stats.gold_earned += outcome.gold_earned;
                for event in &outcome.events {
                    if matches!(
                        event,
                        CombatEvent::WeaponBroke { .. } | CombatEvent::ArmorBroke { .. }
                    ) {
                        stats.items_broken += 1;
                    }
                }
                match outcome.result {
                    EncounterResult::Victory { instant: true } => stats.instant_victories += 1,
                    EncounterResult::Victory { instant: false } => stats.victories += 1,
                    EncounterResult::Fled => stats.flees += 1,
                    EncounterResult::Revived { .. } => stats.revivals += 1,
                }
            }
            // the policy always answers in range, so nothing to recover
            Err(_) => break,
        }
    }

    stats.final_hp = state.player_hp;
    stats.final_gold = state.player_gold;
    stats.doctor_visits = state.doctor_visits;
    stats
}
