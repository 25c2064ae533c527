use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, NewBookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct AddBookCommandRequest {
    pub book: NewBookDto,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, desc: &str, rating: i64) -> Self {
        Self {
            book: NewBookDto::new(title, author, desc, rating),
        }
    }
}


#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookCommandResponse {
    pub message: String,
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            message: "Book created".to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.book).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddBookCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(&Configuration::new("test"));
                AddBookCommand::new(Arc::from(svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("test book", "author", "a description", 3))
            .await.expect("should add book");
        assert_eq!("Book created", res.message);
        assert!(res.book.id > 6);
        assert_eq!("test book", res.book.title);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(AddBookCommandRequest::new("ok title", "", "a description", 3)).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
