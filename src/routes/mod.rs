pub mod poll;
pub mod talks;

use axum::{
    response::{Html, IntoResponse},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Index page
        .route("/", get(index))
        // Talks overview and long-poll
        .route("/talks", get(poll::get_talks))
        // Talk CRUD
        .route("/talks/{title}", put(talks::put_talk))
        .route("/talks/{title}", get(talks::get_talk))
        .route("/talks/{title}", delete(talks::delete_talk))
        .route("/talks/{title}/comments", post(talks::post_comment))
        // Health check
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> impl IntoResponse {
    Html(include_str!("../../public/index.html"))
}

async fn health() -> &'static str {
    "OK"
}
