use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::number::{lax_int, lax_opt_int};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(default, deserialize_with = "lax_opt_int::deserialize")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub desc: String,
    #[serde(deserialize_with = "lax_int::deserialize")]
    pub rating: i64,
}

impl UpdateBookCommandRequest {
    pub fn new(id: i64, title: &str, author: &str, desc: &str, rating: i64) -> Self {
        Self {
            id: Some(id),
            title: title.to_string(),
            author: author.to_string(),
            desc: desc.to_string(),
            rating,
        }
    }

    // A request without an id matches no stored book, since ids start at 1.
    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.id.unwrap_or(0), &self.title, &self.author, &self.desc, self.rating)
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateBookCommandResponse {
    pub message: String,
}

impl UpdateBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: "Book updated".to_string(),
        }
    }
}

impl Default for UpdateBookCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(&book).await
            .map_err(CommandError::from).map(|_| UpdateBookCommandResponse::new())
    }
}
