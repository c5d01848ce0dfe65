//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the canonical validated record used by core business logic.
//! - Own the field validation rules shared with the repository layer.
//!
//! # Invariants
//! - Every constructed `Book` satisfies the title/author/price contracts.
//! - Identity is a repository-assigned `BookId`, append-only monotonic.

pub mod book;
