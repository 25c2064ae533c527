use std::collections::HashMap;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use crate::books::dto::type_violations;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::find_books_by_rating_cmd::{FindBooksByRatingCommand, FindBooksByRatingCommandRequest, FindBooksByRatingCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_body, json_to_server_error, ServerError};
use crate::core::library::FieldViolation;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).fallback(method_not_allowed))
        .route("/create_book", post(add_book).fallback(method_not_allowed))
        .route("/book", get(find_books_by_rating).fallback(method_not_allowed))
        .route("/book/", get(find_books_by_rating).fallback(method_not_allowed))
        .route("/book/update_book", put(update_book).fallback(method_not_allowed))
        .route("/book/:book_id", get(find_book_by_id).fallback(method_not_allowed))
        .route("/books/:book_id", delete(remove_book).fallback(method_not_allowed))
        .fallback(route_not_found)
        .with_state(state)
}

fn parse_int(raw: &str, loc: &[&str]) -> Result<i64, ServerError> {
    raw.trim().parse::<i64>().map_err(|_| ServerError::violations(vec![FieldViolation::new(
        loc, "Input should be a valid integer, unable to parse string as an integer", "int_parsing")]))
}

// Wrongly typed fields are reported by name; anything else falls back to the
// parser message.
fn parse_book_body<T: DeserializeOwned>(body: &Value) -> Result<T, ServerError> {
    T::deserialize(body).map_err(|err| {
        let violations = type_violations(body);
        if violations.is_empty() {
            json_to_server_error(err)
        } else {
            ServerError::violations(violations)
        }
    })
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<(StatusCode, Json<ListBooksCommandResponse>), ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    Ok((StatusCode::ACCEPTED, Json(res)))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = parse_book_body(&json_body(json)?)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let book_id = parse_int(&book_id, &["path", "book_id"])?;
    if book_id <= 0 {
        return Err(ServerError::violations(vec![FieldViolation::path(
            "book_id", "Input should be greater than 0", "greater_than")]));
    }
    let res = GetBookCommand::new(state.catalog).execute(GetBookCommandRequest::new(book_id)).await
        .map_err(|err| {
            tracing::warn!(book_id, "book lookup missed");
            err
        })?;
    Ok(Json(res))
}

pub async fn find_books_by_rating(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<FindBooksByRatingCommandResponse>, ServerError> {
    let raw = params.get("book_rating").ok_or_else(|| ServerError::violations(vec![
        FieldViolation::query("book_rating", "Field required", "missing")]))?;
    let book_rating = parse_int(raw, &["query", "book_rating"])?;
    let res = FindBooksByRatingCommand::new(state.catalog)
        .execute(FindBooksByRatingCommandRequest::new(book_rating)).await?;
    Ok(Json(res))
}

pub async fn update_book(
    State(state): State<AppState>,
    json: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req: UpdateBookCommandRequest = parse_book_body(&json_body(json)?)?;
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let book_id = parse_int(&book_id, &["path", "book_id"])?;
    let res = RemoveBookCommand::new(state.catalog).execute(RemoveBookCommandRequest::new(book_id)).await?;
    Ok(Json(res))
}

async fn route_not_found() -> ServerError {
    ServerError::message(StatusCode::NOT_FOUND, "Not Found")
}

async fn method_not_allowed() -> ServerError {
    ServerError::message(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
