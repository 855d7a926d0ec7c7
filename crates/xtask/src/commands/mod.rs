//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod catalog;
mod decide;
mod score;

pub use catalog::Catalog;
pub use decide::Decide;
pub use score::Score;
