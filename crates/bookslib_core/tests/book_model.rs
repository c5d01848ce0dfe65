use bookslib_core::{Book, BookDraft, BookValidationError};

#[test]
fn new_book_keeps_assigned_values() {
    let book = Book::new(7, "Moby Dick", "Herman Melville", 240.0).unwrap();

    assert_eq!(book.id, 7);
    assert_eq!(book.title(), "Moby Dick");
    assert_eq!(book.author(), "Herman Melville");
    assert_eq!(book.price(), 240.0);
}

#[test]
fn entity_accepts_any_id_including_negative() {
    let book = Book::new(-3, "The Tripitaka", "Unknown Monk", 99.0).unwrap();
    assert_eq!(book.id, -3);
}

#[test]
fn new_book_rejects_short_title() {
    for title in ["", "A", "AB"] {
        let err = Book::new(0, title, "Homer", 350.0).unwrap_err();
        assert_eq!(err, BookValidationError::TitleTooShort);
    }
}

#[test]
fn new_book_rejects_short_author() {
    for author in ["", "C", "Do"] {
        let err = Book::new(0, "White Noise", author, 119.0).unwrap_err();
        assert_eq!(err, BookValidationError::AuthorTooShort);
    }
}

#[test]
fn new_book_rejects_out_of_range_price() {
    for price in [-1.0, 0.0, 1200.01, 1201.0] {
        let err = Book::new(0, "Blood Meridian", "Cormac McCarthy", price).unwrap_err();
        assert_eq!(err, BookValidationError::PriceOutOfRange(price));
    }
}

#[test]
fn price_bounds_are_exclusive_zero_inclusive_max() {
    assert!(Book::new(0, "Shuggie Bain", "Douglas Stuart", 0.01).is_ok());
    assert!(Book::new(0, "Shuggie Bain", "Douglas Stuart", 1200.0).is_ok());
    assert!(Book::new(0, "Shuggie Bain", "Douglas Stuart", 0.0).is_err());
}

#[test]
fn failed_setter_keeps_previous_value() {
    let mut book = Book::new(1, "Homers Iliad", "Homer", 350.0).unwrap();

    assert!(book.set_title("AB").is_err());
    assert_eq!(book.title(), "Homers Iliad");

    assert!(book.set_author("").is_err());
    assert_eq!(book.author(), "Homer");

    assert!(book.set_price(0.0).is_err());
    assert_eq!(book.price(), 350.0);
}

#[test]
fn successful_setters_replace_values() {
    let mut book = Book::new(1, "Homers Iliad", "Homer", 350.0).unwrap();

    book.set_title("Homers Odyssey").unwrap();
    book.set_author("Homer of Chios").unwrap();
    book.set_price(299.0).unwrap();

    assert_eq!(book.title(), "Homers Odyssey");
    assert_eq!(book.author(), "Homer of Chios");
    assert_eq!(book.price(), 299.0);
}

#[test]
fn display_renders_fixed_format() {
    let book = Book::new(1, "Who Wrote The Bible?", "Richard Elliot Friedman", 540.0).unwrap();

    assert_eq!(
        book.to_string(),
        "BookId: 1 / BookTitle: Who Wrote The Bible? / BookAuthor: Richard Elliot Friedman / BookPrice: 540"
    );
}

#[test]
fn validation_error_messages_name_the_rule() {
    assert!(BookValidationError::TitleTooShort
        .to_string()
        .contains("at least 3 characters"));
    assert!(BookValidationError::PriceOutOfRange(1500.0)
        .to_string()
        .contains("1500"));
}

#[test]
fn draft_validate_matches_entity_rules() {
    assert!(BookDraft::new("White Noise", "Don DeLillo", 119.0)
        .validate()
        .is_ok());
    assert_eq!(
        BookDraft::new("Wh", "Don DeLillo", 119.0).validate(),
        Err(BookValidationError::TitleTooShort)
    );
    assert_eq!(
        BookDraft::new("White Noise", "Do", 119.0).validate(),
        Err(BookValidationError::AuthorTooShort)
    );
    assert_eq!(
        BookDraft::new("White Noise", "Don DeLillo", 1201.0).validate(),
        Err(BookValidationError::PriceOutOfRange(1201.0))
    );
}

#[test]
fn book_serializes_expected_wire_fields() {
    let book = Book::new(4, "American Psycho", "Bret Easton Ellis", 119.0).unwrap();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["title"], "American Psycho");
    assert_eq!(json["author"], "Bret Easton Ellis");
    assert_eq!(json["price"], 119.0);
}

#[test]
fn draft_roundtrips_through_json() {
    let draft = BookDraft::new("The Art of War", "Sun Tzu", 180.0);

    let json = serde_json::to_string(&draft).unwrap();
    let decoded: BookDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, draft);
}

#[test]
fn draft_from_book_copies_validated_fields() {
    let book = Book::new(2, "The Agile Samurai", "Jonathan Rasmusson", 219.0).unwrap();
    let draft = BookDraft::from(&book);

    assert_eq!(draft.title, "The Agile Samurai");
    assert_eq!(draft.author, "Jonathan Rasmusson");
    assert_eq!(draft.price, 219.0);
}
