use bookslib_core::{
    Book, BookDraft, BookId, BookQuery, BookService, BooksRepository, InMemoryBooksRepository,
    RepoResult,
};

#[test]
fn service_delegates_crud_to_the_repository() {
    let mut service = BookService::new(InMemoryBooksRepository::new());

    let added = service
        .add_book(&BookDraft::new("Shuggie Bain", "Douglas Stuart", 299.0))
        .unwrap()
        .expect("valid draft is added");
    assert_eq!(added.id, 5);

    let loaded = service.get_book(5).unwrap().expect("added book is visible");
    assert_eq!(loaded.title(), "Shuggie Bain");

    let updated = service
        .update_book(5, &BookDraft::new("Young Mungo", "Douglas Stuart", 279.0))
        .unwrap()
        .expect("id 5 exists");
    assert_eq!(updated.title(), "Young Mungo");

    let removed = service.remove_book(5).unwrap().expect("id 5 exists");
    assert_eq!(removed.id, 5);
    assert!(service.get_book(5).unwrap().is_none());

    assert_eq!(service.list_books(&BookQuery::default()).unwrap().len(), 5);
}

/// Minimal substitute backend proving callers only depend on the trait.
struct EmptyRepository;

impl BooksRepository for EmptyRepository {
    fn add_book(&mut self, _draft: &BookDraft) -> RepoResult<Option<Book>> {
        Ok(None)
    }

    fn get_all_books(&self, _query: &BookQuery) -> RepoResult<Vec<Book>> {
        Ok(Vec::new())
    }

    fn get_book_by_id(&self, _id: BookId) -> RepoResult<Option<Book>> {
        Ok(None)
    }

    fn remove_book(&mut self, _id: BookId) -> RepoResult<Option<Book>> {
        Ok(None)
    }

    fn update_book(&mut self, _id: BookId, _draft: &BookDraft) -> RepoResult<Option<Book>> {
        Ok(None)
    }
}

#[test]
fn service_accepts_alternative_backends() {
    let mut service = BookService::new(EmptyRepository);

    assert!(service.list_books(&BookQuery::default()).unwrap().is_empty());
    assert!(service
        .add_book(&BookDraft::new("White Noise", "Don DeLillo", 119.0))
        .unwrap()
        .is_none());
    assert!(service.get_book(0).unwrap().is_none());
}
