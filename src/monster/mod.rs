//! Monster archetypes and encounter generation.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
