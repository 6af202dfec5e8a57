//! Chat Session
//!
//! One session per client process: a random session identifier, one
//! WebSocket connection scoped to that identifier, and an append-only
//! transcript driven by connection events and user submissions.

mod client;
mod connection;
mod error;
mod events;
mod message;
mod transcript;

pub use client::{ChatSession, SubmitOutcome};
pub use connection::ChatConnection;
pub use error::SessionError;
pub use events::{ChatReply, SessionEvent};
pub use message::{Message, Role};
pub use transcript::Transcript;
