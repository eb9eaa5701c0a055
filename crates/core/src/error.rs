//! Error taxonomy for the call agent
//!
//! Backend failures never cross a trait boundary as errors: reply
//! generation and speech rendering report tagged outcomes
//! ([`crate::turn::ReplyOutcome`], [`crate::turn::RenderOutcome`]) with
//! the fallback policy already applied. The one error that does cross is
//! a failed interaction-log write, which the director logs and swallows.

use thiserror::Error;

/// Call agent errors
#[derive(Error, Debug)]
pub enum Error {
    /// The interaction recorder failed to append an entry
    #[error("interaction log write failed: {0}")]
    Log(String),
}
