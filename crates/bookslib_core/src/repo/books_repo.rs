//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and query APIs over the authoritative catalog.
//! - Keep collection and id-counter state private behind the contract.
//!
//! # Invariants
//! - Write paths re-check draft input against the shared field rules
//!   before any state changes.
//! - No two books in a repository share an id; removed ids are never
//!   reissued (the counter only moves forward).
//! - "Not found" and "rejected input" are absence values (`Ok(None)`),
//!   never errors; invalid update input and unknown sort keys are errors.

use crate::model::book::{Book, BookDraft, BookId, BookValidationError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog mutation and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    UnknownSortKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownSortKey(value) => write!(f, "unknown sort key: {value}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::UnknownSortKey(_) => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Query options for listing books.
///
/// All fields are optional and combine with AND semantics. `order_by`
/// takes the textual sort keys (`title`, `title_desc`, `price_asc`, ...),
/// matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    /// Keep books with `id > id_after` (exclusive lower bound).
    pub id_after: Option<BookId>,
    /// Keep books whose title contains this substring (case-sensitive).
    pub title_includes: Option<String>,
    /// Keep books whose author contains this substring (case-sensitive).
    pub author_includes: Option<String>,
    /// Keep books with `price <= price_max`.
    pub price_max: Option<f64>,
    /// Sort key; `None` keeps collection iteration order.
    pub order_by: Option<String>,
}

/// Reserved structured filter descriptor.
///
/// Placeholder for a future structured-query API; `get_all_books`
/// deliberately takes individual [`BookQuery`] fields instead and does
/// not consume this type yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub price: Option<f64>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub id: Option<BookId>,
}

/// Repository interface for book CRUD and query operations.
///
/// Modeled as a trait so alternative backends (e.g. a persistent store)
/// can be substituted without changing callers.
pub trait BooksRepository {
    /// Adds a book built from `draft`, assigning the next id.
    ///
    /// Returns `Ok(None)` when the draft fails validation; the catalog is
    /// left untouched in that case.
    fn add_book(&mut self, draft: &BookDraft) -> RepoResult<Option<Book>>;

    /// Returns a filtered, optionally sorted snapshot of the catalog.
    ///
    /// # Errors
    /// - `RepoError::UnknownSortKey` when `query.order_by` is set to a
    ///   value outside the supported key set.
    fn get_all_books(&self, query: &BookQuery) -> RepoResult<Vec<Book>>;

    /// Returns the book with the given id, or `Ok(None)`.
    fn get_book_by_id(&self, id: BookId) -> RepoResult<Option<Book>>;

    /// Detaches and returns the book with the given id, or `Ok(None)`.
    /// The id counter is not adjusted.
    fn remove_book(&mut self, id: BookId) -> RepoResult<Option<Book>>;

    /// Overwrites title, author and price of an existing book from `draft`,
    /// preserving its id, and returns the updated record.
    ///
    /// Returns `Ok(None)` when no book has the given id.
    ///
    /// # Errors
    /// - `RepoError::Validation` when a draft field fails validation; the
    ///   stored record is left fully unchanged (validate-then-commit).
    fn update_book(&mut self, id: BookId, draft: &BookDraft) -> RepoResult<Option<Book>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortKey {
    TitleAsc,
    TitleDesc,
    AuthorAsc,
    AuthorDesc,
    IdAsc,
    IdDesc,
    PriceAsc,
    PriceDesc,
}

fn parse_sort_key(value: &str) -> Option<SortKey> {
    match value.to_ascii_lowercase().as_str() {
        "title" | "title_asc" => Some(SortKey::TitleAsc),
        "title_desc" => Some(SortKey::TitleDesc),
        "author" | "author_asc" => Some(SortKey::AuthorAsc),
        "author_desc" => Some(SortKey::AuthorDesc),
        "id" | "id_asc" => Some(SortKey::IdAsc),
        "id_desc" => Some(SortKey::IdDesc),
        "price" | "price_asc" => Some(SortKey::PriceAsc),
        "price_desc" => Some(SortKey::PriceDesc),
        _ => None,
    }
}

fn sort_books(books: &mut [Book], key: SortKey) {
    match key {
        SortKey::TitleAsc => books.sort_by(|a, b| a.title().cmp(b.title())),
        SortKey::TitleDesc => books.sort_by(|a, b| b.title().cmp(a.title())),
        SortKey::AuthorAsc => books.sort_by(|a, b| a.author().cmp(b.author())),
        SortKey::AuthorDesc => books.sort_by(|a, b| b.author().cmp(a.author())),
        SortKey::IdAsc => books.sort_by_key(|b| b.id),
        SortKey::IdDesc => books.sort_by_key(|b| std::cmp::Reverse(b.id)),
        SortKey::PriceAsc => books.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortKey::PriceDesc => books.sort_by(|a, b| b.price().total_cmp(&a.price())),
    }
}

/// Seed catalog present immediately after construction.
const SEED_BOOKS: &[(&str, &str, f64)] = &[
    ("How to Change Your Mind", "Michael Pollan", 299.0),
    ("This Is Your Mind on Plants", "Michael Pollan", 149.0),
    ("The Agile Samurai", "Jonathan Rasmusson", 219.0),
    ("The Botany of Desire", "Michael Pollan", 169.0),
    ("American Psycho", "Bret Easton Ellis", 119.0),
];

/// In-memory book repository.
///
/// Owns the collection (insertion order, which is not id order after
/// removals) and the monotonic id counter. Both are instance-scoped;
/// constructing a second repository yields an independent catalog.
pub struct InMemoryBooksRepository {
    books: Vec<Book>,
    next_id: BookId,
}

impl InMemoryBooksRepository {
    /// Creates a repository pre-seeded with the fixed five-book catalog,
    /// ids 0 through 4, leaving the counter at 5.
    pub fn new() -> Self {
        let mut repo = Self {
            books: Vec::with_capacity(SEED_BOOKS.len()),
            next_id: 0,
        };
        for (title, author, price) in SEED_BOOKS {
            let book = Book::new(repo.next_id, *title, *author, *price)
                .expect("seed catalog entries satisfy the field contracts");
            repo.next_id += 1;
            repo.books.push(book);
        }
        repo
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

impl Default for InMemoryBooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BooksRepository for InMemoryBooksRepository {
    fn add_book(&mut self, draft: &BookDraft) -> RepoResult<Option<Book>> {
        // Backstop check on top of the entity's own validation, so external
        // input is rejected as an absence value instead of an error.
        if let Err(err) = draft.validate() {
            debug!("event=book_add_rejected status=invalid reason={err}");
            return Ok(None);
        }

        let book = Book::new(
            self.next_id,
            draft.title.as_str(),
            draft.author.as_str(),
            draft.price,
        )?;
        self.next_id += 1;
        self.books.push(book.clone());
        info!("event=book_added status=ok id={} next_id={}", book.id, self.next_id);
        Ok(Some(book))
    }

    fn get_all_books(&self, query: &BookQuery) -> RepoResult<Vec<Book>> {
        let sort_key = match query.order_by.as_deref() {
            Some(value) => Some(
                parse_sort_key(value)
                    .ok_or_else(|| RepoError::UnknownSortKey(value.to_string()))?,
            ),
            None => None,
        };

        let mut books: Vec<Book> = self
            .books
            .iter()
            .filter(|book| query.id_after.map_or(true, |id| book.id > id))
            .filter(|book| {
                query
                    .title_includes
                    .as_deref()
                    .map_or(true, |needle| book.title().contains(needle))
            })
            .filter(|book| {
                query
                    .author_includes
                    .as_deref()
                    .map_or(true, |needle| book.author().contains(needle))
            })
            .filter(|book| query.price_max.map_or(true, |max| book.price() <= max))
            .cloned()
            .collect();

        if let Some(key) = sort_key {
            sort_books(&mut books, key);
        }

        Ok(books)
    }

    fn get_book_by_id(&self, id: BookId) -> RepoResult<Option<Book>> {
        Ok(self.books.iter().find(|book| book.id == id).cloned())
    }

    fn remove_book(&mut self, id: BookId) -> RepoResult<Option<Book>> {
        match self.position(id) {
            Some(index) => {
                let book = self.books.remove(index);
                info!("event=book_removed status=ok id={id}");
                Ok(Some(book))
            }
            None => {
                debug!("event=book_removed status=not_found id={id}");
                Ok(None)
            }
        }
    }

    fn update_book(&mut self, id: BookId, draft: &BookDraft) -> RepoResult<Option<Book>> {
        let Some(index) = self.position(id) else {
            debug!("event=book_updated status=not_found id={id}");
            return Ok(None);
        };

        // Validate the whole draft before the first assignment so a bad
        // field can never leave the record partially rewritten.
        draft.validate()?;

        let book = &mut self.books[index];
        book.set_title(draft.title.as_str())?;
        book.set_author(draft.author.as_str())?;
        book.set_price(draft.price)?;
        info!("event=book_updated status=ok id={id}");
        Ok(Some(book.clone()))
    }
}
