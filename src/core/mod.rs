//! Balance constants shared by every game system.

pub mod constants;

pub use constants::*;
