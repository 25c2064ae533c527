use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByRatingCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByRatingCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByRatingCommandRequest {
    pub book_rating: i64,
}

impl FindBooksByRatingCommandRequest {
    pub fn new(book_rating: i64) -> Self {
        Self {
            book_rating,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FindBooksByRatingCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<FindBooksByRatingCommandRequest, FindBooksByRatingCommandResponse> for FindBooksByRatingCommand {
    async fn execute(&self, req: FindBooksByRatingCommandRequest) -> Result<FindBooksByRatingCommandResponse, CommandError> {
        self.catalog_service.find_books_by_rating(req.book_rating).await
            .map_err(CommandError::from).map(|books| FindBooksByRatingCommandResponse { books })
    }
}
