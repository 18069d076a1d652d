//! Word puzzle rounds: the letter-guessing half of every battle.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
