// Menu driven forms over the catalog service. Prompts only enforce the
// numeric ranges of ids and ratings; everything else is checked by the
// service and reported back in the error banner.

use anyhow::Result;
use dialoguer::{Input, Select};
use serde_json::Value;
use crate::books::dto::{BookDto, NewBookDto, MAX_RATING, MIN_RATING};
use crate::client::api::CatalogClient;

pub const MENU: [&str; 7] = [
    "View books",
    "Add book",
    "Search by ID",
    "Search by rating",
    "Update book",
    "Delete book",
    "Exit",
];

/// Runs the select loop until the user picks "Exit".
pub fn main_menu(api: CatalogClient) -> Result<()> {
    println!("Book Manager ({})", api.base_url());
    loop {
        let selection = Select::new()
            .with_prompt("Menu")
            .items(&MENU)
            .default(0)
            .interact()?;
        let res = match selection {
            0 => api.list_books(),
            1 => api.create_book(&prompt_new_book()?),
            2 => api.find_book(prompt_book_id("Book ID")?),
            3 => api.find_books_by_rating(prompt_rating("Rating")?),
            4 => api.update_book(&prompt_update()?),
            5 => api.delete_book(prompt_book_id("Book ID to delete")?),
            _ => break,
        };
        println!("{}", render(res));
    }
    Ok(())
}

fn prompt_text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_book_id(prompt: &str) -> Result<i64> {
    let id: i64 = Input::new()
        .with_prompt(prompt)
        .validate_with(|id: &i64| -> Result<(), &'static str> {
            if *id >= 1 { Ok(()) } else { Err("id must be at least 1") }
        })
        .interact_text()?;
    Ok(id)
}

fn prompt_rating(prompt: &str) -> Result<i64> {
    let rating: i64 = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, MIN_RATING, MAX_RATING))
        .default(MIN_RATING)
        .validate_with(|r: &i64| -> Result<(), &'static str> {
            if (MIN_RATING..=MAX_RATING).contains(r) { Ok(()) } else { Err("rating must be between 1 and 5") }
        })
        .interact_text()?;
    Ok(rating)
}

fn prompt_new_book() -> Result<NewBookDto> {
    let title = prompt_text("Title")?;
    let author = prompt_text("Author")?;
    let desc = prompt_text("Description")?;
    let rating = prompt_rating("Rating")?;
    Ok(NewBookDto::new(&title, &author, &desc, rating))
}

fn prompt_update() -> Result<BookDto> {
    let id = prompt_book_id("Book ID")?;
    let title = prompt_text("New Title")?;
    let author = prompt_text("New Author")?;
    let desc = prompt_text("New Description")?;
    let rating = prompt_rating("New Rating")?;
    Ok(BookDto::new(id, &title, &author, &desc, rating))
}

/// Pretty prints a response body, or frames the error as a banner.
pub fn render(res: Result<Value>) -> String {
    match res {
        Ok(body) => serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string()),
        Err(e) => {
            let line = "=".repeat(60);
            format!("{}\n  ERROR: {}\n{}", line, e, line)
        }
    }
}
