use axum_taskhub::app;
use axum_taskhub::config::Config;
use axum_taskhub::services::{TaskRegistry, UserStore};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    // Shared state: the in-memory task registry and the flat-file user store
    let registry = TaskRegistry::new();
    let users = UserStore::new(&config.store.users_file);

    let app = app(registry, users);

    println!("Server running");
    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", config.server.host, config.server.port)
    )
    .await
    .expect("Failed to bind server");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
