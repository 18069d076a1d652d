//! Items, the shop catalog, and inventory operations.

pub mod catalog;
pub mod ledger;
pub mod types;

pub use catalog::*;
pub use ledger::*;
pub use types::*;
