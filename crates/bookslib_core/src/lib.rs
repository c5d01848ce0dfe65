//! Core domain logic for the BooksLib catalog.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookDraft, BookId, BookValidationError};
pub use repo::books_repo::{
    BookFilter, BookQuery, BooksRepository, InMemoryBooksRepository, RepoError, RepoResult,
};
pub use service::book_service::BookService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
