use bookshelf::catalog::controller::build_router;
use bookshelf::catalog::factory;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env("main")?;
    let addr = config.bind_addr().await?;
    let state = AppState::new(factory::create_catalog_service(&config));

    let app = build_router(state);

    tracing::info!(%addr, branch = %config.branch_id, seeded = config.seed_books, "catalog service listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
