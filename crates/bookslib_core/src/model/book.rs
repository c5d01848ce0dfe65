//! Book domain model.
//!
//! # Responsibility
//! - Define the validated catalog record and its input shape.
//! - Keep the field validation rules in one place so every construction
//!   path enforces them.
//!
//! # Invariants
//! - A `Book` never holds a title or author shorter than 3 characters.
//! - A `Book` never holds a price outside `(0, 1200]`.
//! - `id` carries no entity-level validation; the repository assigns ids.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository-assigned identifier for a catalog record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The entity accepts any integer here, including negative values; sane
/// id assignment is the repository's job.
pub type BookId = i64;

/// Minimum character count for `title` and `author`.
pub const MIN_TEXT_LEN: usize = 3;
/// Upper price bound, inclusive.
pub const PRICE_MAX: f64 = 1200.0;

/// Validation failure for a single book field assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum BookValidationError {
    TitleTooShort,
    AuthorTooShort,
    PriceOutOfRange(f64),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTooShort => write!(
                f,
                "title is required and must be at least {MIN_TEXT_LEN} characters long"
            ),
            Self::AuthorTooShort => write!(
                f,
                "author is required and must be at least {MIN_TEXT_LEN} characters long"
            ),
            Self::PriceOutOfRange(price) => write!(
                f,
                "price {price} must be greater than 0 and at most {PRICE_MAX}"
            ),
        }
    }
}

impl Error for BookValidationError {}

/// Validates a title candidate without constructing anything.
///
/// Shared with the repository layer so external input is checked by the
/// exact same rule the entity enforces.
pub fn validate_title(value: &str) -> Result<(), BookValidationError> {
    if value.is_empty() || value.chars().count() < MIN_TEXT_LEN {
        return Err(BookValidationError::TitleTooShort);
    }
    Ok(())
}

/// Validates an author candidate. Same rule as titles.
pub fn validate_author(value: &str) -> Result<(), BookValidationError> {
    if value.is_empty() || value.chars().count() < MIN_TEXT_LEN {
        return Err(BookValidationError::AuthorTooShort);
    }
    Ok(())
}

/// Validates a price candidate against the `(0, 1200]` contract.
pub fn validate_price(price: f64) -> Result<(), BookValidationError> {
    if price > 0.0 && price <= PRICE_MAX {
        Ok(())
    } else {
        Err(BookValidationError::PriceOutOfRange(price))
    }
}

/// Validated catalog record.
///
/// `title`, `author` and `price` are private and only reachable through
/// getters and fallible setters, so no code path can observe a `Book`
/// violating the field contracts. Serialization is one-way on purpose:
/// deserializing external input goes through [`BookDraft`] instead, which
/// keeps validation in the loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    /// Repository-assigned identifier; not validated at entity level.
    pub id: BookId,
    title: String,
    author: String,
    price: f64,
}

impl Book {
    /// Creates a book after validating every field.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> Result<Self, BookValidationError> {
        let title = title.into();
        let author = author.into();
        validate_title(&title)?;
        validate_author(&author)?;
        validate_price(price)?;
        Ok(Self {
            id,
            title,
            author,
            price,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Replaces the title; on failure the previous value stays in place.
    pub fn set_title(&mut self, value: impl Into<String>) -> Result<(), BookValidationError> {
        let value = value.into();
        validate_title(&value)?;
        self.title = value;
        Ok(())
    }

    /// Replaces the author; on failure the previous value stays in place.
    pub fn set_author(&mut self, value: impl Into<String>) -> Result<(), BookValidationError> {
        let value = value.into();
        validate_author(&value)?;
        self.author = value;
        Ok(())
    }

    /// Replaces the price; on failure the previous value stays in place.
    pub fn set_price(&mut self, value: f64) -> Result<(), BookValidationError> {
        validate_price(value)?;
        self.price = value;
        Ok(())
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BookId: {} / BookTitle: {} / BookAuthor: {} / BookPrice: {}",
            self.id, self.title, self.author, self.price
        )
    }
}

/// Unvalidated input shape for add/update requests.
///
/// This is what an embedding application deserializes from its transport
/// layer before handing it to the repository; the repository re-checks it
/// against the shared rules before any state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// Checks all three fields against the entity rules, first failure wins.
    ///
    /// Field order matches entity construction: title, author, price.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        validate_title(&self.title)?;
        validate_author(&self.author)?;
        validate_price(self.price)?;
        Ok(())
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
        }
    }
}
