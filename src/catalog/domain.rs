pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, NewBookDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn find_books_by_rating(&self, rating: i64) -> LibraryResult<Vec<BookDto>>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<BookDto>;
}
