//! Word battles: encounter state and the actions that drive it.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
