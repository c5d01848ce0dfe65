//! Book use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for embedding applications.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Service layer remains storage-agnostic.

use crate::model::book::{Book, BookDraft, BookId};
use crate::repo::books_repo::{BookQuery, BooksRepository, RepoResult};

/// Use-case service wrapper for catalog operations.
pub struct BookService<R: BooksRepository> {
    repo: R,
}

impl<R: BooksRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a book from draft input; `Ok(None)` means the draft was rejected.
    pub fn add_book(&mut self, draft: &BookDraft) -> RepoResult<Option<Book>> {
        self.repo.add_book(draft)
    }

    /// Lists books using filter and sort options.
    pub fn list_books(&self, query: &BookQuery) -> RepoResult<Vec<Book>> {
        self.repo.get_all_books(query)
    }

    /// Gets one book by id.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book_by_id(id)
    }

    /// Removes one book by id, returning the detached record.
    pub fn remove_book(&mut self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.remove_book(id)
    }

    /// Updates an existing book from draft input, preserving its id.
    ///
    /// Returns repository-level not-found and validation results unchanged.
    pub fn update_book(&mut self, id: BookId, draft: &BookDraft) -> RepoResult<Option<Book>> {
        self.repo.update_book(id, draft)
    }
}
