use rand::Rng;

use crate::core::money::round_cents;

use super::types::{Monster, MonsterArchetype};

/// The stock roster of town-outskirts monsters.
pub const DEFAULT_ROSTER: &[MonsterArchetype] = &[
    MonsterArchetype {
        name: "Pixie",
        description: "You find a sparkling little creature buzzing around. \
                      When it notices you, it rushes at you quickly with a sharp dagger.",
        health: (10, 20),
        power: (5, 10),
        money: (1.0, 15.0),
    },
    MonsterArchetype {
        name: "Frog",
        description: "You discover a frog licking its lips as it looks you over.",
        health: (5, 15),
        power: (2, 7),
        money: (1.0, 10.0),
    },
    MonsterArchetype {
        name: "Vampire",
        description: "A shadowy figure jumps out at you from behind a tree.",
        health: (30, 50),
        power: (10, 20),
        money: (5.0, 30.0),
    },
];

/// Rolls a fresh monster from `roster`: uniform archetype choice, then
/// independent uniform rolls within that archetype's ranges. Called once
/// per encounter.
///
/// # Panics
///
/// Panics if `roster` is empty.
pub fn generate_monster(roster: &[MonsterArchetype], rng: &mut impl Rng) -> Monster {
    let archetype = &roster[rng.gen_range(0..roster.len())];
    Monster {
        name: archetype.name.to_string(),
        description: archetype.description.to_string(),
        health: rng.gen_range(archetype.health.0..=archetype.health.1),
        power: rng.gen_range(archetype.power.0..=archetype.power.1),
        money: round_cents(rng.gen_range(archetype.money.0..=archetype.money.1)),
    }
}
