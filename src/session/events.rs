//! Session Events and Wire Types
//!
//! The connection publishes typed events onto a single-consumer channel;
//! the controller applies them in arrival order. Inbound frames are JSON
//! with at least a `response` field; everything else is ignored.

use serde::Deserialize;

/// Events published by the chat connection, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The WebSocket handshake completed; submissions may proceed
    Opened,
    /// The service sent a reply; the payload is the `response` text
    Reply(String),
    /// The connection ended, whether cleanly or not. Emitted exactly once.
    Closed,
}

/// Inbound frame payload from the chat service
///
/// The service sends `{"response": "...", "type": "assistant"}`; only the
/// `response` field is consumed. Frames missing it are dropped and logged.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_parses_response_field() {
        let json = r#"{"response": "hi there"}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "hi there");
    }

    #[test]
    fn test_reply_ignores_extra_fields() {
        let json = r#"{"response": "hi there", "type": "assistant", "latency_ms": 120}"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "hi there");
    }

    #[test]
    fn test_reply_missing_response_is_error() {
        let json = r#"{"type": "assistant"}"#;
        assert!(serde_json::from_str::<ChatReply>(json).is_err());
    }
}
