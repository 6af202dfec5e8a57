//! Music Chat HTTP API
//!
//! Client for the REST side of the chat service. The only endpoint the
//! client consumes is the artist list.

mod client;

pub use client::{ApiClient, ApiError};
