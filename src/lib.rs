//! Wander - Turn-Based Town & Monster Adventure Core
//!
//! Game logic for a small adventure loop: fight randomly generated
//! monsters, manage durability-limited gear, rest at the inn, shop, and
//! persist progress. Presentation is left entirely to the caller, which
//! supplies player choices through [`decision::DecisionProvider`] and
//! narrates the [`combat::CombatEvent`]s each operation returns.

pub mod adventure;
pub mod combat;
pub mod core;
pub mod decision;
pub mod error;
pub mod items;
pub mod monster;
pub mod save_manager;
pub mod simulator;
pub mod town;

pub use crate::core::game_state::GameState;
pub use crate::error::GameError;
pub use crate::save_manager::SaveManager;
