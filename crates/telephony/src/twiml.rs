//! TwiML voice-response builder
//!
//! Builds the small subset of TwiML this agent emits: Say, Play, Gather
//! (speech input) and Hangup. Text and attribute values are XML-escaped.

use call_agent_core::{CallAction, SpokenOutput, TurnOutcome};

/// One TwiML verb
#[derive(Debug, Clone)]
enum Verb {
    Say { text: String, voice: String },
    Play { url: String },
    Gather(Gather),
    Hangup,
}

/// A speech `<Gather>`: plays its nested verbs, then listens until the
/// timeout and POSTs the transcript back to `action`.
#[derive(Debug, Clone)]
pub struct Gather {
    timeout_secs: u64,
    action: String,
    contents: Vec<Verb>,
}

impl Gather {
    /// Speech gather posting back to `action`
    pub fn speech(timeout_secs: u64, action: impl Into<String>) -> Self {
        Self {
            timeout_secs,
            action: action.into(),
            contents: Vec::new(),
        }
    }

    /// Speak a prompt inside the gather window
    pub fn say(mut self, text: impl Into<String>, voice: impl Into<String>) -> Self {
        self.contents.push(Verb::Say {
            text: text.into(),
            voice: voice.into(),
        });
        self
    }

    fn write_to(&self, out: &mut String) {
        out.push_str(&format!(
            "<Gather input=\"speech\" timeout=\"{}\" speechTimeout=\"auto\" action=\"{}\" method=\"POST\">",
            self.timeout_secs,
            escape_xml(&self.action)
        ));
        for verb in &self.contents {
            verb.write_to(out);
        }
        out.push_str("</Gather>");
    }
}

impl Verb {
    fn write_to(&self, out: &mut String) {
        match self {
            Verb::Say { text, voice } => {
                out.push_str(&format!(
                    "<Say voice=\"{}\">{}</Say>",
                    escape_xml(voice),
                    escape_xml(text)
                ));
            }
            Verb::Play { url } => {
                out.push_str(&format!("<Play>{}</Play>", escape_xml(url)));
            }
            Verb::Gather(gather) => gather.write_to(out),
            Verb::Hangup => out.push_str("<Hangup/>"),
        }
    }
}

/// TwiML `<Response>` document builder
#[derive(Debug, Clone, Default)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(mut self, text: impl Into<String>, voice: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say {
            text: text.into(),
            voice: voice.into(),
        });
        self
    }

    pub fn play(mut self, url: impl Into<String>) -> Self {
        self.verbs.push(Verb::Play { url: url.into() });
        self
    }

    pub fn gather(mut self, gather: Gather) -> Self {
        self.verbs.push(Verb::Gather(gather));
        self
    }

    pub fn hangup(mut self) -> Self {
        self.verbs.push(Verb::Hangup);
        self
    }

    /// Translate a turn outcome into its TwiML document.
    ///
    /// Spoken outputs come first (Play for clips, Say for text), then the
    /// continuation: a speech Gather posting back to `action`, or Hangup.
    pub fn from_outcome(outcome: &TurnOutcome, voice: &str, action: &str) -> Self {
        let mut response = Self::new();
        for spoken in &outcome.spoken {
            response = match spoken {
                SpokenOutput::Audio(clip) => response.play(&clip.url),
                SpokenOutput::Text(text) => response.say(text, voice),
            };
        }
        match &outcome.action {
            CallAction::Listen { timeout_secs, prompt } => {
                let mut gather = Gather::speech(*timeout_secs, action);
                if let Some(prompt) = prompt {
                    gather = gather.say(prompt, voice);
                }
                response.gather(gather)
            }
            CallAction::Hangup => response.hangup(),
        }
    }

    /// Render the full XML document
    pub fn render(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response>");
        for verb in &self.verbs {
            verb.write_to(&mut out);
        }
        out.push_str("</Response>");
        out
    }
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use call_agent_core::{AudioClip, CallAction, SpokenOutput, TurnOutcome};
    use uuid::Uuid;

    #[test]
    fn greeting_document_shape() {
        let xml = VoiceResponse::new()
            .gather(Gather::speech(10, "/turn").say("Hello, how can I help?", "Polly.Joanna"))
            .say("I didn't catch that. Goodbye.", "Polly.Joanna")
            .render();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response>"));
        assert!(xml.contains(
            "<Gather input=\"speech\" timeout=\"10\" speechTimeout=\"auto\" action=\"/turn\" method=\"POST\">"
        ));
        assert!(xml.contains("<Say voice=\"Polly.Joanna\">Hello, how can I help?</Say></Gather>"));
        assert!(xml.ends_with("<Say voice=\"Polly.Joanna\">I didn't catch that. Goodbye.</Say></Response>"));
    }

    #[test]
    fn text_is_escaped() {
        let xml = VoiceResponse::new().say("Tom & Jerry <live>", "Polly.Joanna").render();
        assert!(xml.contains("<Say voice=\"Polly.Joanna\">Tom &amp; Jerry &lt;live&gt;</Say>"));
    }

    #[test]
    fn hangup_outcome_renders_says_then_hangup() {
        let outcome = TurnOutcome {
            spoken: vec![
                SpokenOutput::Text("It was nice talking to you.".to_string()),
                SpokenOutput::Text("You're welcome. Goodbye!".to_string()),
            ],
            action: CallAction::Hangup,
        };
        let xml = VoiceResponse::from_outcome(&outcome, "Polly.Joanna", "/turn").render();
        assert!(xml.contains("You're welcome. Goodbye!</Say><Hangup/></Response>"));
    }

    #[test]
    fn listen_outcome_with_prompt_puts_prompt_inside_gather() {
        let outcome = TurnOutcome {
            spoken: vec![SpokenOutput::Text("We are on Main Street.".to_string())],
            action: CallAction::Listen {
                timeout_secs: 15,
                prompt: Some("Can I help you with anything else?".to_string()),
            },
        };
        let xml = VoiceResponse::from_outcome(&outcome, "Polly.Joanna", "/turn").render();

        // The reply precedes the gather; the prompt sits inside it
        assert!(xml.contains("We are on Main Street.</Say><Gather"));
        assert!(xml.contains("POST\"><Say voice=\"Polly.Joanna\">Can I help you with anything else?</Say></Gather>"));
    }

    #[test]
    fn listen_outcome_without_prompt_has_empty_gather() {
        let outcome = TurnOutcome {
            spoken: vec![SpokenOutput::Text("We're open 9 to 5, anything else?".to_string())],
            action: CallAction::Listen { timeout_secs: 15, prompt: None },
        };
        let xml = VoiceResponse::from_outcome(&outcome, "Polly.Joanna", "/turn").render();
        assert!(xml.contains("method=\"POST\"></Gather>"));
    }

    #[test]
    fn audio_output_renders_play() {
        let id = Uuid::new_v4();
        let outcome = TurnOutcome {
            spoken: vec![SpokenOutput::Audio(AudioClip {
                id,
                url: format!("http://localhost:5001/audio/{id}"),
            })],
            action: CallAction::Hangup,
        };
        let xml = VoiceResponse::from_outcome(&outcome, "Polly.Joanna", "/turn").render();
        assert!(xml.contains(&format!("<Play>http://localhost:5001/audio/{id}</Play>")));
    }
}
