//! Shared test utilities for scn integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All helpers are deterministic — catalogs are built
//! in-memory, no filesystem or terminal involved.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
