// src/routes/mod.rs
pub mod stream;

use axum::{
    Router,
    routing::{get, post},
};
use stream::{method_not_allowed, preflight_handler, stream_handler};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route(
            "/stream",
            post(stream_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
