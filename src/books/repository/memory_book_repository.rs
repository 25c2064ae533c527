use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug)]
struct Shelf {
    books: Vec<BookEntity>,
    // next id to hand out; never decreases, so deleted ids are not reused
    next_id: i64,
}

#[derive(Debug)]
pub struct MemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::with_books(vec![])
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            shelf: RwLock::new(Shelf { books, next_id }),
        }
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut shelf = self.shelf.write().await;
        let book = entity.clone().with_id(shelf.next_id);
        shelf.next_id += 1;
        shelf.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut shelf = self.shelf.write().await;
        match shelf.books.iter_mut().find(|b| b.id() == entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("book {} not found", entity.id()).as_str())),
        }
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let shelf = self.shelf.read().await;
        shelf.books.iter().find(|b| b.id() == id).cloned().ok_or_else(
            || LibraryError::not_found(format!("book {} not found", id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<BookEntity> {
        let mut shelf = self.shelf.write().await;
        match shelf.books.iter().position(|b| b.id() == id) {
            Some(pos) => Ok(shelf.books.remove(pos)),
            None => Err(LibraryError::not_found(
                format!("book {} not found", id).as_str())),
        }
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.shelf.read().await.books.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_rating(&self, rating: i64) -> LibraryResult<Vec<BookEntity>> {
        let shelf = self.shelf.read().await;
        Ok(shelf.books.iter().filter(|b| b.has_rating(rating)).cloned().collect())
    }
}
