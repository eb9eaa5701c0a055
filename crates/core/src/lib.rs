//! Core types and traits for the call agent
//!
//! This crate provides the foundational pieces shared by all other crates:
//! - Turn-scoped types (utterances, outcomes, directives)
//! - Traits for pluggable backends (reply generation, speech rendering,
//!   interaction logging)
//! - Error types

pub mod error;
pub mod traits;
pub mod turn;

pub use error::Error;
pub use traits::{InteractionLog, ReplyGenerator, SpeechRenderer};
pub use turn::{
    AudioClip, CallAction, InteractionEntry, NormalizedUtterance, RenderOutcome, ReplyOutcome,
    SpokenOutput, TurnOutcome,
};
