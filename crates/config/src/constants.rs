//! Fixed conversation constants
//!
//! These values are part of the conversation contract, constant across all
//! calls and sessions, and set once at startup. They are intentionally not
//! part of `Settings`.

/// System persona steering the language model, constant across all calls.
pub const PERSONA: &str = "You're a helpful, polite virtual receptionist. \
     If the user says thank you or no, end the call by saying goodbye and hanging up.";

/// Hard cap on reply length requested from the language model.
pub const MAX_REPLY_TOKENS: u32 = 100;

/// Spoken when the language-model backend fails for a turn.
pub const APOLOGY_REPLY: &str = "Sorry, I had trouble processing that.";

/// Spoken (followed by hangup) when no usable speech was captured.
pub const NO_INPUT_GOODBYE: &str = "I didn't catch that. Goodbye.";

/// Spoken (followed by hangup) when the caller wants to end the call.
pub const TERMINATION_GOODBYE: &str = "You're welcome. Goodbye!";

/// Appended inside the gather when the reply did not end in a question.
pub const FOLLOW_UP_PROMPT: &str = "Can I help you with anything else?";

/// Phrases that signal the caller wants to end the call.
///
/// Matching is case-insensitive and substring-based, so "no problem" ends
/// the call too. That false positive is documented behavior, kept on
/// purpose; do not silently harden it to whole-word matching.
pub const TERMINATION_PHRASES: &[&str] = &["no", "thank you", "i'm good", "bye", "goodbye"];

/// Gather timeout for the initial greeting, in seconds.
///
/// Shorter than the per-turn timeout: a caller responding to a fresh
/// greeting needs less time to start speaking than one mid-conversation.
/// Keep these two constants distinct.
pub const GREETING_GATHER_TIMEOUT_SECS: u64 = 10;

/// Gather timeout for every director-driven turn, in seconds.
pub const TURN_GATHER_TIMEOUT_SECS: u64 = 15;

/// Default greeting spoken when a call first connects.
pub const DEFAULT_GREETING: &str =
    "Hello, thank you for calling the help desk. How can I help you today?";

/// Default telephony-side voice used for spoken markup.
pub const DEFAULT_SAY_VOICE: &str = "Polly.Joanna";
