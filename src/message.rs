// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct StreamRequest {
    pub prompt: Option<String>,
}

/// One SSE message. Character envelopes carry `chunk` and `done: false`;
/// the single terminal envelope carries `done: true` and `totalChars`.
/// Absent fields stay off the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk: Option<String>,
    pub done: bool,
    #[serde(rename = "totalChars", skip_serializing_if = "Option::is_none")]
    pub total_chars: Option<usize>,
}

impl StreamEnvelope {
    pub fn chunk(ch: char) -> Self {
        Self {
            chunk: Some(ch.to_string()),
            done: false,
            total_chars: None,
        }
    }

    pub fn done(total_chars: usize) -> Self {
        Self {
            chunk: None,
            done: true,
            total_chars: Some(total_chars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_envelope_omits_total_chars() {
        let json = serde_json::to_string(&StreamEnvelope::chunk('a')).unwrap();
        assert_eq!(json, r#"{"chunk":"a","done":false}"#);
    }

    #[test]
    fn done_envelope_omits_chunk() {
        let json = serde_json::to_string(&StreamEnvelope::done(42)).unwrap();
        assert_eq!(json, r#"{"done":true,"totalChars":42}"#);
    }

    #[test]
    fn request_tolerates_missing_prompt() {
        let req: StreamRequest = serde_json::from_str("{}").unwrap();
        assert!(req.prompt.is_none());
    }
}
