use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{FieldViolation, LibraryError, LibraryResult};
use crate::utils::number::{as_lax_int, lax_int, lax_opt_int};

pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_AUTHOR_LEN: usize = 1;
pub const MIN_DESC_LEN: usize = 3;
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

pub const BOOK_TEXT_FIELDS: [&str; 3] = ["title", "author", "desc"];
pub const BOOK_INT_FIELDS: [&str; 2] = ["id", "rating"];

// BookDto is the wire shape of a book returned by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub desc: String,
    pub rating: i64,
}

impl BookDto {
    pub fn new(id: i64, title: &str, author: &str, desc: &str, rating: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            desc: desc.to_string(),
            rating,
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        check_fields(&self.title, &self.author, &self.desc, self.rating)
    }
}

// NewBookDto is a create payload; any client supplied id is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookDto {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lax_opt_int::deserialize")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub desc: String,
    #[serde(deserialize_with = "lax_int::deserialize")]
    pub rating: i64,
}

impl NewBookDto {
    pub fn new(title: &str, author: &str, desc: &str, rating: i64) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            desc: desc.to_string(),
            rating,
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        check_fields(&self.title, &self.author, &self.desc, self.rating)
    }
}

fn check_fields(title: &str, author: &str, desc: &str, rating: i64) -> LibraryResult<()> {
    let mut violations = vec![];
    check_min_len(&mut violations, "title", title, MIN_TITLE_LEN);
    check_min_len(&mut violations, "author", author, MIN_AUTHOR_LEN);
    check_min_len(&mut violations, "desc", desc, MIN_DESC_LEN);
    if let Some(violation) = check_rating(&["body", "rating"], rating) {
        violations.push(violation);
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(LibraryError::validation("invalid book", violations))
    }
}

fn check_min_len(violations: &mut Vec<FieldViolation>, field: &str, value: &str, min: usize) {
    if value.chars().count() < min {
        let plural = if min == 1 { "character" } else { "characters" };
        violations.push(FieldViolation::body(
            field, format!("String should have at least {} {}", min, plural).as_str(), "string_too_short"));
    }
}

// check_rating is shared by the body field and the rating query parameter.
pub fn check_rating(loc: &[&str], rating: i64) -> Option<FieldViolation> {
    if rating < MIN_RATING {
        Some(FieldViolation::new(loc, format!("Input should be greater than {}", MIN_RATING - 1).as_str(), "greater_than"))
    } else if rating > MAX_RATING {
        Some(FieldViolation::new(loc, format!("Input should be less than {}", MAX_RATING + 1).as_str(), "less_than"))
    } else {
        None
    }
}

// Locates body fields holding a value of the wrong JSON type, so a rejected
// body names the offending field instead of only the parser message.
pub fn type_violations(body: &Value) -> Vec<FieldViolation> {
    let mut violations = vec![];
    let fields = match body {
        Value::Object(fields) => fields,
        _ => {
            violations.push(FieldViolation::new(&["body"], "Input should be a valid dictionary", "dict_type"));
            return violations;
        }
    };
    for field in BOOK_TEXT_FIELDS {
        if fields.get(field).map_or(false, |v| !v.is_string()) {
            violations.push(FieldViolation::body(field, "Input should be a valid string", "string_type"));
        }
    }
    for field in BOOK_INT_FIELDS {
        match fields.get(field) {
            None | Some(Value::Null) if field == "id" => {}
            None => {}
            Some(value) if as_lax_int(value).is_some() => {}
            Some(Value::String(_)) => violations.push(FieldViolation::body(
                field, "Input should be a valid integer, unable to parse string as an integer", "int_parsing")),
            Some(_) => violations.push(FieldViolation::body(
                field, "Input should be a valid integer", "int_type")),
        }
    }
    violations
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
    fn rating(&self) -> i64 {
        self.rating
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            desc: other.desc.to_string(),
            rating: other.rating,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(&other.title, &other.author, &other.desc, other.rating).with_id(other.id)
    }
}

impl From<&NewBookDto> for BookEntity {
    fn from(other: &NewBookDto) -> Self {
        BookEntity::new(&other.title, &other.author, &other.desc, other.rating)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use serde_json::json;
    use crate::books::dto::{check_rating, type_violations, BookDto, NewBookDto};
    use crate::core::library::LibraryError;

    fn violated_fields(err: LibraryError) -> Vec<String> {
        match err {
            LibraryError::Validation { violations, .. } => violations.iter().map(|v| v.loc[1].clone()).collect(),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_accept_valid_book() {
        let book = NewBookDto::new("X book", "A", "desc text", 4);
        assert!(book.validate().is_ok());
    }

    #[tokio::test]
    async fn test_should_reject_short_fields() {
        let book = NewBookDto::new("ab", "", "de", 3);
        let err = book.validate().expect_err("should reject");
        assert_eq!(vec!["title", "author", "desc"], violated_fields(err));
    }

    #[tokio::test]
    async fn test_should_count_characters_not_bytes() {
        let book = BookDto::new(1, "éé", "a", "abc", 3);
        let err = book.validate().expect_err("two characters is too short");
        assert_eq!(vec!["title"], violated_fields(err));
        assert!(BookDto::new(1, "ééé", "a", "abc", 3).validate().is_ok());
    }

    #[tokio::test]
    async fn test_should_reject_rating_out_of_range() {
        assert_eq!(vec!["rating"], violated_fields(NewBookDto::new("abc", "a", "abc", 0).validate().unwrap_err()));
        assert_eq!(vec!["rating"], violated_fields(NewBookDto::new("abc", "a", "abc", 6).validate().unwrap_err()));
        assert_eq!("less_than", check_rating(&["query", "book_rating"], 9).expect("violation").kind);
        assert_eq!("greater_than", check_rating(&["query", "book_rating"], -1).expect("violation").kind);
        assert!(check_rating(&["query", "book_rating"], 5).is_none());
    }

    #[tokio::test]
    async fn test_should_ignore_client_id_on_create() {
        let book: NewBookDto = serde_json::from_str(
            r#"{"id": 99, "title": "abc", "author": "a", "desc": "abc", "rating": 2}"#).expect("parse");
        assert_eq!(Some(99), book.id);
        assert_eq!(0, BookEntity::from(&book).id);
    }

    #[tokio::test]
    async fn test_should_map_entity() {
        let entity = BookEntity::new("title", "author", "desc", 2).with_id(4);
        let dto = BookDto::from(&entity);
        assert_eq!(4, dto.id);
        assert_eq!(entity, BookEntity::from(&dto));
    }

    #[tokio::test]
    async fn test_should_accept_integral_rating_forms() {
        for rating in [json!(4), json!(4.0), json!("4")] {
            let book: NewBookDto = serde_json::from_value(
                json!({"title": "abc", "author": "a", "desc": "abc", "rating": rating})).expect("parse");
            assert_eq!(4, book.rating);
        }
        let book: NewBookDto = serde_json::from_value(
            json!({"id": null, "title": "abc", "author": "a", "desc": "abc", "rating": 1})).expect("parse");
        assert_eq!(None, book.id);
    }

    #[tokio::test]
    async fn test_should_reject_fractional_rating() {
        let res = serde_json::from_value::<NewBookDto>(
            json!({"title": "abc", "author": "a", "desc": "abc", "rating": 4.5}));
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn test_should_locate_wrongly_typed_fields() {
        let violations = type_violations(&json!({"title": 12, "author": "a", "desc": "abc", "rating": 4.5, "id": "x"}));
        let locs: Vec<Vec<String>> = violations.iter().map(|v| v.loc.clone()).collect();
        assert_eq!(vec![vec!["body", "title"], vec!["body", "id"], vec!["body", "rating"]], locs);
        assert_eq!("int_parsing", violations[1].kind);
        assert_eq!("int_type", violations[2].kind);

        assert!(type_violations(&json!({"id": null, "title": "abc", "rating": "4"})).is_empty());
        assert_eq!("dict_type", type_violations(&json!([1, 2]))[0].kind);
    }
}
