//! Headless balance simulator.
//!
//! Plays many full town-and-adventure loops against the real game core to
//! sanity-check the gold and durability economy.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
