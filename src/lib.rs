//! # Airwave
//!
//! Terminal client for the music chat service. Each run of the client is one
//! chat session: a fresh session identifier, a list of artists fetched over
//! HTTP, and a single WebSocket connection carrying the conversation.
//!
//! ## Modules
//!
//! - [`session`]: Session lifecycle, transcript, and the chat connection
//! - [`api`]: HTTP client for the artist list endpoint
//! - [`config`]: Configuration loading from files and environment variables
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use airwave::{ChatSession, SessionEvent, SubmitOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = ChatSession::new();
//!     let mut events = session.connect("ws://localhost:8000").await?;
//!
//!     // Wait for the handshake before submitting anything
//!     if let Some(event) = events.recv().await {
//!         session.handle_event(event);
//!     }
//!
//!     session.set_draft("What do you think about Disclosure?");
//!     assert_eq!(session.submit(), SubmitOutcome::Sent);
//!
//!     // Replies arrive as events, in order
//!     if let Some(SessionEvent::Reply(text)) = events.recv().await {
//!         println!("Annie: {}", text);
//!     }
//!
//!     session.close();
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod session;

// Re-export top-level types for convenience
pub use session::{
    ChatConnection, ChatReply, ChatSession, Message, Role, SessionError, SessionEvent,
    SubmitOutcome, Transcript,
};

pub use api::{ApiClient, ApiError};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
