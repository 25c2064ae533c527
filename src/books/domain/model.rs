use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the record held by the catalog store. An id of 0 marks an
// entity that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub desc: String,
    pub rating: i64,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, desc: &str, rating: i64) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            author: author.to_string(),
            desc: desc.to_string(),
            rating,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn rating(&self) -> i64 {
        self.rating
    }
}

// The catalog a fresh service starts with.
pub fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("start with py", "yc", "amzing book", 5).with_id(1),
        BookEntity::new("start with fsapi", "jc", "interesting", 5).with_id(2),
        BookEntity::new("start with endpoints", "kc", "splendid", 5).with_id(3),
        BookEntity::new("start with jq", "yc", "not good", 3).with_id(4),
        BookEntity::new("start with rust", "yc", "not good", 2).with_id(5),
        BookEntity::new("start with d", "yc", "not good", 1).with_id(6),
    ]
}
