pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    routing::{get, post, put, delete},
    Router,
};
use tower_http::trace::TraceLayer;
use crate::services::{TaskRegistry, UserStore};

// Builds the application router over the shared service handles. Kept apart
// from main so integration tests can drive the router in-process.
pub fn app(registry: TaskRegistry, users: UserStore) -> Router {
    Router::new()
        // Auth routes
        .route("/register", post(handlers::handle_register))
        .route("/login", post(handlers::handle_login))
        // Task routes
        .route("/task", post(handlers::create_task))
        .route("/task/:task_id", get(handlers::get_task))
        .route("/task/:task_id", put(handlers::update_task))
        .route("/task/:task_id", delete(handlers::delete_task))
        .route("/tasks", get(handlers::list_tasks))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state((registry, users))
}
