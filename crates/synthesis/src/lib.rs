//! Speech synthesis for reply text
//!
//! Converts reply strings into playable audio clips via an HTTP TTS
//! backend. Clips are stored in-process and served locally; nothing is
//! streamed. Any synthesis failure degrades to markup-side speech of the
//! same text: the caller always hears something, and it is always the
//! reply text.

pub mod client;
pub mod clips;
pub mod renderer;

pub use client::{ElevenLabsClient, ElevenLabsConfig};
pub use clips::{ClipStore, CLIP_MAX_AGE, CLIP_SWEEP_INTERVAL};
pub use renderer::HttpSpeechRenderer;

use thiserror::Error;

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SynthesisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SynthesisError::Timeout
        } else {
            SynthesisError::Network(err.to_string())
        }
    }
}
