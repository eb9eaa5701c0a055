//! Backend traits
//!
//! The turn director depends on these abstractly so that deterministic
//! tests can substitute fakes returning canned outcomes. Implementations
//! must already have applied their own fallback policy: both `reply_to`
//! and `render` return tagged outcomes rather than errors, because every
//! downstream failure is recovered locally (see `crate::error`).

use async_trait::async_trait;

use crate::error::Error;
use crate::turn::{InteractionEntry, RenderOutcome, ReplyOutcome};

/// Produces reply text for a normalized, non-empty utterance.
///
/// One attempt per turn; the caller is waiting live, so implementations
/// must enforce a bounded timeout and report failure instead of retrying.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn reply_to(&self, utterance: &str) -> ReplyOutcome;
}

/// Converts reply text into playable audio.
///
/// On any failure the implementation returns `Unavailable` and the director
/// speaks the same text through the markup path instead. The caller must
/// always hear something.
#[async_trait]
pub trait SpeechRenderer: Send + Sync {
    async fn render(&self, text: &str) -> RenderOutcome;
}

/// Append-only interaction log.
///
/// Best-effort: a failed write is reported as `Error::Log` so the caller
/// can log and swallow it. Recording never alters a computed turn outcome.
#[async_trait]
pub trait InteractionLog: Send + Sync {
    async fn record(&self, entry: InteractionEntry) -> Result<(), Error>;
}
