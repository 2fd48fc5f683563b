use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podium::{create_router, AppState, Config, TalkBoard};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: LISTEN_ADDR (default: 0.0.0.0:8000)");
            eprintln!("Optional: POLL_TIMEOUT_SECS (default: 90)");
            eprintln!("Optional: CHANGE_RETENTION_SECS (default: 0, keep all history)");
            eprintln!("Optional: PUBLIC_DIR (default: public)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Podium server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Long-poll timeout: {:?}", config.poll_timeout);
    tracing::info!("Change retention: {:?}", config.retention);

    // Create app state
    let board = TalkBoard::new(config.poll_timeout, config.retention);
    let state = AppState::new(board);

    // Build router
    let app = create_router(state).nest_service("/public", ServeDir::new(&config.public_dir));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
