//! Map enemies and the word lists they draw from.

pub mod enemies;
pub mod words;

pub use enemies::*;
pub use words::*;
