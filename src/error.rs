//! Recoverable game errors.
//!
//! Every failed operation leaves player state exactly as it was before the
//! call; the caller presents the error and retries. Item breakage is a
//! normal state transition, not an error.

use thiserror::Error;

use crate::items::EquipSlot;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("not enough gold: need {needed:.2}, have {available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("no {0} in inventory to equip")]
    NoEligibleItem(EquipSlot),

    #[error("invalid selection")]
    InvalidSelection,

    #[error("item price must be greater than zero")]
    InvalidPrice,

    #[error("no save file found")]
    NotFound,

    #[error("save file error: {0}")]
    Io(#[from] std::io::Error),
}
