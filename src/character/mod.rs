//! Character classes, the player profile, and progression.

pub mod classes;
pub mod player;
pub mod progression;

pub use classes::*;
pub use player::*;
pub use progression::*;
