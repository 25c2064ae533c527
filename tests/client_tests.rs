mod common;

use bookshelf::books::dto::{BookDto, NewBookDto};
use bookshelf::client::api::CatalogClient;
use common::{spawn_server_thread, test_config};

fn client(seed: bool) -> CatalogClient {
    let base = spawn_server_thread(test_config(seed));
    CatalogClient::new(&base).unwrap()
}

#[test]
fn client_lists_books() {
    let api = client(true);
    let books = api.list_books().unwrap();
    assert_eq!(books.as_array().unwrap().len(), 6);
}

#[test]
fn client_creates_and_finds_book() {
    let api = client(true);

    let created = api.create_book(&NewBookDto::new("X book", "A", "desc text", 4)).unwrap();
    assert_eq!(created["book"]["id"], 7);

    let found = api.find_book(7).unwrap();
    assert_eq!(found["title"], "X book");
}

#[test]
fn client_reports_validation_errors() {
    let api = client(false);
    let err = api.create_book(&NewBookDto::new("", "A", "desc text", 4)).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("422"), "{}", msg);
    assert!(msg.contains("body.title"), "{}", msg);
}

#[test]
fn client_searches_by_rating() {
    let api = client(true);
    let books = api.find_books_by_rating(1).unwrap();
    let titles: Vec<&str> = books.as_array().unwrap().iter().map(|b| b["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["start with d"]);
}

#[test]
fn client_updates_and_deletes() {
    let api = client(true);

    let updated = api.update_book(&BookDto::new(2, "new title", "B", "new desc", 3)).unwrap();
    assert_eq!(updated["message"], "Book updated");
    assert_eq!(api.find_book(2).unwrap()["title"], "new title");

    let deleted = api.delete_book(2).unwrap();
    assert_eq!(deleted["message"], "Book deleted");

    let err = api.find_book(2).unwrap_err();
    assert!(err.to_string().contains("Book not found"));
}

#[test]
fn client_reports_missing_update_target() {
    let api = client(true);
    let err = api.update_book(&BookDto::new(99, "new title", "B", "new desc", 3)).unwrap_err();
    assert!(err.to_string().contains("404"));
}
