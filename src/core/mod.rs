//! Core session state and shared helpers.

pub mod constants;
pub mod game_state;
pub mod money;

pub use constants::*;
pub use game_state::*;
pub use money::*;
