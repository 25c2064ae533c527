use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// FieldViolation locates a single rejected input, e.g. `["body", "title"]` or
// `["path", "book_id"]`, together with a readable message and a machine kind.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldViolation {
    pub fn new(loc: &[&str], msg: &str, kind: &str) -> Self {
        FieldViolation {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.to_string(),
            kind: kind.to_string(),
        }
    }

    pub fn body(field: &str, msg: &str, kind: &str) -> Self {
        Self::new(&["body", field], msg, kind)
    }

    pub fn path(field: &str, msg: &str, kind: &str) -> Self {
        Self::new(&["path", field], msg, kind)
    }

    pub fn query(field: &str, msg: &str, kind: &str) -> Self {
        Self::new(&["query", field], msg, kind)
    }
}

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, violations: Vec<FieldViolation>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), violations }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, violations } => {
                write!(f, "{} ({} violations)", message, violations.len())
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its repository.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::{FieldViolation, LibraryError};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        let err = LibraryError::validation("test", vec![FieldViolation::body("title", "too short", "string_too_short")]);
        assert!(matches!(err, LibraryError::Validation{ message: _, violations: _ }));
        assert_eq!("test (1 violations)", err.to_string());
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<i64>("not json").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_serialize_violation_kind_as_type() {
        let violation = FieldViolation::query("book_rating", "Input should be less than 6", "less_than");
        let json = serde_json::to_value(&violation).expect("serialize violation");
        assert_eq!("less_than", json["type"]);
        assert_eq!(serde_json::json!(["query", "book_rating"]), json["loc"]);
    }
}
