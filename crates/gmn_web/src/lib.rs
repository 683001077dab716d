use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/article", get(handlers::read_article))
        .layer(cors)
        .with_state(Arc::new(state))
}
