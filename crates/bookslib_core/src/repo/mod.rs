//! Repository layer contract and implementations.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for the catalog.
//! - Isolate collection and counter state from service orchestration.
//!
//! # Invariants
//! - Repository writes re-validate external input with the shared model
//!   rules before mutating state.
//! - Repository APIs signal missing records as absence values, reserving
//!   errors for invalid arguments.

pub mod books_repo;
