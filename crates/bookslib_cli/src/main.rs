//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bookslib_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use bookslib_core::{BookQuery, BookService, InMemoryBooksRepository};

fn main() {
    println!("bookslib_core version={}", bookslib_core::core_version());

    let service = BookService::new(InMemoryBooksRepository::new());
    let query = BookQuery {
        order_by: Some("id_asc".to_string()),
        ..BookQuery::default()
    };
    match service.list_books(&query) {
        Ok(books) => {
            for book in books {
                println!("{book}");
            }
        }
        Err(err) => eprintln!("failed to list seeded catalog: {err}"),
    }
}
