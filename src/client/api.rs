// Blocking HTTP client for the catalog service. Each method maps to one
// endpoint and returns the decoded JSON body so the UI can show it as is.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde_json::Value;
use crate::books::dto::{BookDto, NewBookDto};

pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(CatalogClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Uses `CATALOG_URL` when set, otherwise the local default.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.into());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_books(&self) -> Result<Value> {
        let res = self.client.get(format!("{}/books", self.base_url))
            .send()
            .context("Failed to send list request")?;
        read_json(res, StatusCode::ACCEPTED, "List books")
    }

    pub fn create_book(&self, book: &NewBookDto) -> Result<Value> {
        let res = self.client.post(format!("{}/create_book", self.base_url))
            .json(book)
            .send()
            .context("Failed to send create request")?;
        read_json(res, StatusCode::CREATED, "Create book")
    }

    pub fn find_book(&self, book_id: i64) -> Result<Value> {
        let res = self.client.get(format!("{}/book/{}", self.base_url, book_id))
            .send()
            .context("Failed to send find request")?;
        read_json(res, StatusCode::OK, "Find book")
    }

    pub fn find_books_by_rating(&self, rating: i64) -> Result<Value> {
        let res = self.client.get(format!("{}/book/", self.base_url))
            .query(&[("book_rating", rating)])
            .send()
            .context("Failed to send rating search request")?;
        read_json(res, StatusCode::OK, "Search by rating")
    }

    pub fn update_book(&self, book: &BookDto) -> Result<Value> {
        let res = self.client.put(format!("{}/book/update_book", self.base_url))
            .json(book)
            .send()
            .context("Failed to send update request")?;
        read_json(res, StatusCode::OK, "Update book")
    }

    pub fn delete_book(&self, book_id: i64) -> Result<Value> {
        let res = self.client.delete(format!("{}/books/{}", self.base_url, book_id))
            .send()
            .context("Failed to send delete request")?;
        read_json(res, StatusCode::OK, "Delete book")
    }
}

fn read_json(res: Response, expected: StatusCode, action: &str) -> Result<Value> {
    let status = res.status();
    let txt = res.text().unwrap_or_else(|_| "".into());
    if status != expected {
        anyhow::bail!("{} failed: {} - {}", action, status, error_detail(&txt));
    }
    serde_json::from_str(&txt).with_context(|| format!("Parsing {} response json", action))
}

// Pulls `detail` out of an error body, falling back to the raw text.
fn error_detail(txt: &str) -> String {
    match serde_json::from_str::<Value>(txt) {
        Ok(Value::Object(body)) => match body.get("detail") {
            Some(Value::String(detail)) => detail.to_string(),
            Some(Value::Array(violations)) => violations.iter()
                .map(|v| {
                    let loc = v["loc"].as_array()
                        .map(|parts| parts.iter().filter_map(Value::as_str).collect::<Vec<_>>().join("."))
                        .unwrap_or_default();
                    format!("{}: {}", loc, v["msg"].as_str().unwrap_or(""))
                })
                .collect::<Vec<_>>()
                .join("; "),
            Some(other) => other.to_string(),
            None => txt.to_string(),
        },
        _ => txt.to_string(),
    }
}
