//! Adventure flow: encounters wrapped with revival handling.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
