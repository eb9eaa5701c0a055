//! Turn-scoped types
//!
//! Everything here lives for exactly one inbound-webhook / outbound-response
//! cycle. Values are single-assignment: once a turn is assembled nothing is
//! mutated, which is what makes replaying a turn with identical backend
//! responses yield an identical outcome.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A caller utterance after normalization.
///
/// Absent input, the empty string and whitespace-only strings are all
/// `Empty`; `Empty` is a valid state for a turn, not an error on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedUtterance {
    /// Non-empty transcribed text, surrounding whitespace trimmed
    Present(String),
    /// No usable speech was captured
    Empty,
}

impl NormalizedUtterance {
    pub fn is_empty(&self) -> bool {
        matches!(self, NormalizedUtterance::Empty)
    }
}

/// Tagged result of one language-model invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The backend produced reply text
    Generated(String),
    /// The backend failed; the reason is for logs only, never spoken
    Failed(String),
}

/// Reference to a synthesized audio clip served over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Clip identifier in the local clip store
    pub id: Uuid,
    /// Publicly reachable URL the telephony provider fetches
    pub url: String,
}

/// Tagged result of one speech-synthesis invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Synthesis succeeded and the clip is stored and servable
    Audio(AudioClip),
    /// Synthesis failed; the same text must be spoken via markup instead
    Unavailable,
}

/// One unit of speech delivered to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpokenOutput {
    /// Play a synthesized clip
    Audio(AudioClip),
    /// Literal text for the telephony provider to speak
    Text(String),
}

/// Continuation decision for a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallAction {
    /// Speak, then gather the next utterance with the given timeout.
    /// `prompt` is spoken inside the gather window, after the main outputs.
    Listen {
        timeout_secs: u64,
        prompt: Option<String>,
    },
    /// Speak, then terminate the call
    Hangup,
}

/// The complete outcome of one turn: what to speak, in order, and whether
/// to keep listening afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub spoken: Vec<SpokenOutput>,
    pub action: CallAction,
}

impl TurnOutcome {
    /// Convenience for the fixed hangup responses (no audio involved)
    pub fn hangup_with_text(text: impl Into<String>) -> Self {
        Self {
            spoken: vec![SpokenOutput::Text(text.into())],
            action: CallAction::Hangup,
        }
    }

    pub fn is_hangup(&self) -> bool {
        matches!(self.action, CallAction::Hangup)
    }
}

/// One append-only interaction log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEntry {
    pub timestamp: DateTime<Utc>,
    /// Call identifier from the telephony provider, when present
    pub call_sid: Option<String>,
    pub utterance: String,
    pub reply: String,
}

impl InteractionEntry {
    /// Build an entry stamped with the current time
    pub fn now(call_sid: Option<String>, utterance: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            call_sid,
            utterance: utterance.into(),
            reply: reply.into(),
        }
    }
}
