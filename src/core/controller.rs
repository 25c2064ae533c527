use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::library::FieldViolation;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Box<dyn CatalogService>) -> AppState {
        AppState {
            catalog: Arc::from(catalog),
        }
    }
}

// ErrorBody is the `{detail}` body of every failed request. The detail is a
// plain message, or a list of field violations for rejected input.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: Value,
}

#[derive(Debug)]
pub struct ServerError {
    pub status: StatusCode,
    pub detail: Value,
}

impl ServerError {
    pub fn message(status: StatusCode, message: &str) -> Self {
        ServerError { status, detail: Value::String(message.to_string()) }
    }

    pub fn violations(violations: Vec<FieldViolation>) -> Self {
        ServerError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: serde_json::to_value(violations).unwrap_or(Value::Null),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

// Bodies that are not JSON, or not sent as JSON, are rejected input like any
// other malformed body.
pub fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ServerError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(status = %rejection.status(), "rejected request body");
        ServerError::violations(vec![FieldViolation::new(&["body"], rejection.body_text().as_str(), "json_invalid")])
    })
}

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    let msg = err.to_string();
    let violation = match missing_field(&msg) {
        Some(field) => FieldViolation::body(field, "Field required", "missing"),
        None => FieldViolation::new(&["body"], msg.as_str(), "value_error"),
    };
    ServerError::violations(vec![violation])
}

// serde reports absent fields as "missing field `name` at line 1 column 2".
fn missing_field(msg: &str) -> Option<&str> {
    let rest = msg.strip_prefix("missing field `")?;
    rest.split('`').next()
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                ServerError::message(StatusCode::NOT_FOUND, message.as_str())
            }
            CommandError::Validation { violations, .. } => {
                ServerError::violations(violations)
            }
            CommandError::Serialization { message } => {
                ServerError::violations(vec![FieldViolation::new(&["body"], message.as_str(), "value_error")])
            }
            CommandError::Runtime { message, .. } => {
                tracing::error!(error = %message, "request failed");
                ServerError::message(StatusCode::INTERNAL_SERVER_ERROR, message.as_str())
            }
        }
    }
}
