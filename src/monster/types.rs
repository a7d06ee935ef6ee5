use serde::{Deserialize, Serialize};

/// A generated encounter opponent.
///
/// Ephemeral: created when an encounter starts, discarded at its terminal
/// outcome, never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub description: String,
    pub health: u32,
    /// Fixed damage dealt per retaliation.
    pub power: u32,
    /// Gold reward on defeat, rounded to cents.
    pub money: f64,
}

/// A monster template: fixed name and flavor text, randomized stat ranges.
///
/// Rosters are plain data so balance passes only touch numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterArchetype {
    pub name: &'static str,
    pub description: &'static str,
    /// Inclusive health range.
    pub health: (u32, u32),
    /// Inclusive power range.
    pub power: (u32, u32),
    /// Inclusive gold reward range.
    pub money: (f64, f64),
}
