//! Call agent HTTP server
//!
//! Axum application exposing the telephony webhooks (`/voice`, `/turn`),
//! the synthesized-audio serving route, and health endpoints.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("initialization error: {0}")]
    Init(String),
}
