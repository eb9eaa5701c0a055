//! Termination classification

use call_agent_config::constants::TERMINATION_PHRASES;

/// Decide whether the caller wants to end the call.
///
/// True when the lower-cased utterance contains any termination phrase as a
/// substring. Substring matching is a deliberate simplification: "no, tell
/// me more" and "no problem" both end the call. That false positive is
/// documented behavior and must not be silently changed to whole-word or
/// intent-based matching.
pub fn wants_to_end(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    TERMINATION_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
