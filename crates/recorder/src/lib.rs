//! Interaction recorder
//!
//! Append-only, timestamped log of (utterance, reply) pairs, one per
//! completed turn with a non-empty utterance. Strictly best-effort: a
//! failed write is reported so the director can log and swallow it, and
//! recording runs off the critical path so it never delays the spoken
//! response.

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlInteractionLog;
pub use memory::{MemoryInteractionLog, NullInteractionLog};

use thiserror::Error;

/// Recorder errors
#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<RecorderError> for call_agent_core::Error {
    fn from(err: RecorderError) -> Self {
        call_agent_core::Error::Log(err.to_string())
    }
}
