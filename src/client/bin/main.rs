// Entrypoint for the interactive catalog client: build the HTTP client from
// the environment and hand it to the menu loop, which blocks until "Exit".

use bookshelf::client::{api::CatalogClient, ui::main_menu};

fn main() -> anyhow::Result<()> {
    let api = CatalogClient::from_env()?;
    main_menu(api)?;
    Ok(())
}
