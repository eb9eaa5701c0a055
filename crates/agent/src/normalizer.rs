//! Utterance normalization

use call_agent_core::NormalizedUtterance;

/// Normalize a raw transcript for one turn.
///
/// Absent input, the empty string and whitespace-only strings all map to
/// `Empty`; anything else is trimmed and returned as `Present`. `Empty`
/// short-circuits the turn director into the fixed no-input hangup with no
/// backend call at all.
pub fn normalize(raw: Option<&str>) -> NormalizedUtterance {
    match raw {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                NormalizedUtterance::Empty
            } else {
                NormalizedUtterance::Present(trimmed.to_string())
            }
        }
        None => NormalizedUtterance::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_empty() {
        assert!(normalize(None).is_empty());
    }

    #[test]
    fn blank_strings_are_empty() {
        assert!(normalize(Some("")).is_empty());
        assert!(normalize(Some("   ")).is_empty());
        assert!(normalize(Some("\t\n")).is_empty());
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            normalize(Some("  what hours are you open?  ")),
            NormalizedUtterance::Present("what hours are you open?".to_string())
        );
    }
}
