// src/services/emitter.rs
use std::time::Duration;

use async_stream::stream;
use futures::Stream;
use tokio::time::sleep;

use crate::message::StreamEnvelope;

/// Turn the full response text into a paced sequence of single-character
/// envelopes followed by exactly one terminal envelope.
///
/// The first character goes out immediately; every subsequent emission waits
/// `delay` after the previous one. Characters are Unicode scalar values, and
/// the terminal `totalChars` counts the same units, so it always equals the
/// number of chunk envelopes. Dropping the stream (client disconnect) aborts
/// the loop mid-sleep and nothing further is scheduled.
pub fn emit_chars(text: String, delay: Duration) -> impl Stream<Item = StreamEnvelope> {
    stream! {
        let total_chars = text.chars().count();
        for ch in text.chars() {
            yield StreamEnvelope::chunk(ch);
            sleep(delay).await;
        }
        yield StreamEnvelope::done(total_chars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn emits_every_char_then_done() {
        let envelopes: Vec<_> = emit_chars("hey".to_string(), Duration::ZERO)
            .collect()
            .await;

        assert_eq!(envelopes.len(), 4);
        for (env, expected) in envelopes.iter().zip(["h", "e", "y"]) {
            assert!(!env.done);
            assert_eq!(env.chunk.as_deref(), Some(expected));
            assert_eq!(env.total_chars, None);
        }

        let last = envelopes.last().unwrap();
        assert!(last.done);
        assert_eq!(last.chunk, None);
        assert_eq!(last.total_chars, Some(3));
    }

    #[tokio::test]
    async fn empty_text_yields_only_terminal_envelope() {
        let envelopes: Vec<_> = emit_chars(String::new(), Duration::ZERO).collect().await;

        assert_eq!(envelopes.len(), 1);
        assert!(envelopes[0].done);
        assert_eq!(envelopes[0].total_chars, Some(0));
    }

    #[tokio::test]
    async fn counts_codepoints_not_bytes() {
        let envelopes: Vec<_> = emit_chars("📝⏰".to_string(), Duration::ZERO)
            .collect()
            .await;

        assert_eq!(envelopes.len(), 3);
        assert_eq!(envelopes[0].chunk.as_deref(), Some("📝"));
        assert_eq!(envelopes[1].chunk.as_deref(), Some("⏰"));
        assert_eq!(envelopes[2].total_chars, Some(2));
    }
}
