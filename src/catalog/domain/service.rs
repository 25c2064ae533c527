use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{check_rating, BookDto, NewBookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const NOT_FOUND: &str = "not found";

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }
}

// Replaces the repository message with the one callers see.
fn not_found_as(message: &str) -> impl Fn(LibraryError) -> LibraryError + '_ {
    move |err| match err {
        LibraryError::NotFound { .. } => LibraryError::not_found(message),
        other => other,
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        tracing::debug!(count = books.len(), "listed books");
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        let created = BookDto::from(&self.book_repository.create(&BookEntity::from(book)).await?);
        self.events_publisher.publish(&DomainEvent::added(
            "books", self.branch_id.as_str(), created.id.to_string().as_str(), &created)?).await?;
        tracing::info!(book_id = created.id, title = %created.title, "book created");
        Ok(created)
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await
            .map(|b| BookDto::from(&b))
            .map_err(not_found_as(BOOK_NOT_FOUND))
    }

    async fn find_books_by_rating(&self, rating: i64) -> LibraryResult<Vec<BookDto>> {
        if let Some(violation) = check_rating(&["query", "book_rating"], rating) {
            return Err(LibraryError::validation("invalid rating", vec![violation]));
        }
        let books = self.book_repository.find_by_rating(rating).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        let _ = self.book_repository.update(&BookEntity::from(book)).await
            .map_err(not_found_as(NOT_FOUND))?;
        self.events_publisher.publish(&DomainEvent::updated(
            "books", self.branch_id.as_str(), book.id.to_string().as_str(), book)?).await?;
        tracing::info!(book_id = book.id, "book updated");
        Ok(book.clone())
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<BookDto> {
        let removed = BookDto::from(&self.book_repository.delete(id).await
            .map_err(not_found_as(NOT_FOUND))?);
        self.events_publisher.publish(&DomainEvent::deleted(
            "books", self.branch_id.as_str(), id.to_string().as_str(), &removed)?).await?;
        tracing::info!(book_id = id, "book deleted");
        Ok(removed)
    }
}
