use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::Level;

use streambot_backend::routes;
use streambot_backend::state::{AppState, StreamConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let state = Arc::new(AppState::new(StreamConfig::from_env()));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 streaming chatbot running at http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
