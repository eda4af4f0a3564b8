// src/state.rs
use std::sync::Arc;
use std::time::Duration;

use crate::services::classifier::ReplyTable;

pub type SharedState = Arc<AppState>;

/// Pacing of the character stream. The default delay is visible to the naked
/// eye so progressive delivery can be watched from a browser.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub char_delay: Duration,
}

impl StreamConfig {
    /// Read `STREAM_DELAY_MS` from the environment, falling back to 30 ms.
    pub fn from_env() -> Self {
        let ms = std::env::var("STREAM_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self {
            char_delay: Duration::from_millis(ms),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(30),
        }
    }
}

pub struct AppState {
    pub replies: ReplyTable,
    pub config: StreamConfig,
}

impl AppState {
    pub fn new(config: StreamConfig) -> Self {
        Self {
            replies: ReplyTable::builtin(),
            config,
        }
    }
}
