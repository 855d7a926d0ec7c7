//! Public decision API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the AI internals under [`crate::providers`] can change freely.

pub mod errors;
pub mod providers;

pub use errors::{DecisionError, Result, Side};
pub use providers::{Decision, DecisionRequest, MoveProvider};
