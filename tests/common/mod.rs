use std::net::SocketAddr;
use bookshelf::catalog::controller::build_router;
use bookshelf::catalog::factory;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;

#[allow(dead_code)]
pub fn test_config(seed: bool) -> Configuration {
    let config = Configuration::new("test");
    if seed { config } else { config.without_seed() }
}

/// Serves a fresh catalog on an OS-assigned port, returning the base URL.
#[allow(dead_code)]
pub async fn spawn_test_server(config: Configuration) -> String {
    let state = AppState::new(factory::create_catalog_service(&config));
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = axum::Server::bind(&addr).serve(build_router(state).into_make_service());
    let port = server.local_addr().port();
    tokio::spawn(async move {
        server.await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Runs the catalog on its own runtime thread so blocking clients can call it.
#[allow(dead_code)]
pub fn spawn_server_thread(config: Configuration) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let base = spawn_test_server(config).await;
            tx.send(base).unwrap();
            std::future::pending::<()>().await;
        });
    });
    rx.recv().unwrap()
}
