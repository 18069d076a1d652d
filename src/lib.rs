//! Wordbattle - word-guessing RPG battle engine
//!
//! This module exposes the game logic for the terminal binary and for tests.

pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod puzzle;
pub mod session;
pub mod utils;
pub mod world;
