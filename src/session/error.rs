//! Session Errors

use thiserror::Error;

/// Errors from the chat session and its connection
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Connection failed: {0}")]
    Connect(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Session already has an active connection")]
    AlreadyConnected,
}
