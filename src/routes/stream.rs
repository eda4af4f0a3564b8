use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{
        IntoResponse, Response,
        sse::{Event, Sse},
    },
};
use futures::StreamExt;
use tracing::info;

use crate::{
    error::AppError,
    message::StreamRequest,
    services::{classifier::compose_response, emitter::emit_chars},
    state::SharedState,
};

pub async fn stream_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // The body is parsed by hand so that malformed JSON and a missing prompt
    // surface as the same 400, without content-type gatekeeping.
    let payload: StreamRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Prompt required".to_string()))?;

    let prompt = payload.prompt.unwrap_or_default();
    if prompt.is_empty() {
        return Err(AppError::BadRequest("Prompt required".to_string()));
    }

    info!("📝 prompt: {prompt}");

    let reply = state.replies.classify(&prompt);
    let full_text = compose_response(&prompt, reply);

    let events = emit_chars(full_text, state.config.char_delay)
        .map(|envelope| Event::default().json_data(&envelope));

    let headers = [
        (header::CACHE_CONTROL, "no-cache, no-transform"),
        (header::CONNECTION, "keep-alive"),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    ];

    Ok((headers, Sse::new(events)).into_response())
}

// Bare OPTIONS probes reach this handler; browser preflights are answered by
// the CORS layer before routing.
pub async fn preflight_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
