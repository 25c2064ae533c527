use crate::books::domain::model::seed_books;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;

pub fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    if config.seed_books {
        Box::new(MemoryBookRepository::with_books(seed_books()))
    } else {
        Box::new(MemoryBookRepository::new())
    }
}
