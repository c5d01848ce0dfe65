//! Use-case service layer.
//!
//! # Responsibility
//! - Offer storage-agnostic entry points over the repository contract.
//!
//! # Invariants
//! - Services delegate; they hold no catalog state of their own.

pub mod book_service;
