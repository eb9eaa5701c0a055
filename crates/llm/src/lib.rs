//! Reply generation against an OpenAI-compatible completion backend
//!
//! One request per turn, fixed persona, bounded reply length. There is no
//! retry loop: the caller is on the line waiting, so a failed attempt maps
//! straight to the fixed apology fallback in the turn director.

pub mod backend;
pub mod generator;

pub use backend::{OpenAiBackend, OpenAiConfig};
pub use generator::LlmReplyGenerator;

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}
