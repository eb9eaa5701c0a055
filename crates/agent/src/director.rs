//! Turn director state machine
//!
//! Sequences one turn: `AwaitingUtterance -> Processing -> Responding ->
//! {Continuing | Terminated}`. No state is revisited and no turn outlives
//! its webhook callback. The director holds no per-call state; everything
//! it needs arrives in the [`TurnInput`] or lives in process-wide read-only
//! configuration, which is what makes concurrent turns trivially safe.

use std::fmt;
use std::sync::Arc;

use call_agent_config::constants::{
    APOLOGY_REPLY, FOLLOW_UP_PROMPT, NO_INPUT_GOODBYE, TERMINATION_GOODBYE,
    TURN_GATHER_TIMEOUT_SECS,
};
use call_agent_core::{
    CallAction, InteractionEntry, InteractionLog, NormalizedUtterance, RenderOutcome,
    ReplyGenerator, ReplyOutcome, SpeechRenderer, SpokenOutput, TurnOutcome,
};

use crate::normalizer::normalize;
use crate::termination::wants_to_end;

/// The inbound half of one turn.
#[derive(Debug, Clone, Default)]
pub struct TurnInput {
    /// Call identifier from the telephony provider, for logs only
    pub call_sid: Option<String>,
    /// Raw transcript, absent when no speech was detected
    pub utterance: Option<String>,
}

impl TurnInput {
    pub fn new(call_sid: Option<String>, utterance: Option<String>) -> Self {
        Self { call_sid, utterance }
    }
}

/// Turn director states. Terminal states are `Continuing` and `Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingUtterance,
    Processing,
    Responding,
    Continuing,
    Terminated,
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnState::AwaitingUtterance => "awaiting_utterance",
            TurnState::Processing => "processing",
            TurnState::Responding => "responding",
            TurnState::Continuing => "continuing",
            TurnState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Orchestrates one turn end to end.
///
/// Backends are injected as trait objects so tests can substitute fakes
/// returning canned outcomes; the two network calls within a turn are
/// sequential because synthesis needs the reply text.
pub struct TurnDirector {
    replies: Arc<dyn ReplyGenerator>,
    speech: Arc<dyn SpeechRenderer>,
    log: Arc<dyn InteractionLog>,
}

impl TurnDirector {
    pub fn new(
        replies: Arc<dyn ReplyGenerator>,
        speech: Arc<dyn SpeechRenderer>,
        log: Arc<dyn InteractionLog>,
    ) -> Self {
        Self { replies, speech, log }
    }

    /// Run one full turn and produce its outcome.
    ///
    /// Never returns an error: every downstream failure is recovered into a
    /// spoken fallback, so the caller always hears a sentence and the call
    /// either continues listening or hangs up cleanly.
    pub async fn run_turn(&self, input: TurnInput) -> TurnOutcome {
        let call_sid = input.call_sid.as_deref().unwrap_or("-");
        self.transition(call_sid, TurnState::AwaitingUtterance, TurnState::Processing);

        // Empty input terminates immediately; neither backend is invoked.
        let utterance = match normalize(input.utterance.as_deref()) {
            NormalizedUtterance::Empty => {
                tracing::info!(call_sid, "no usable speech captured, hanging up");
                self.transition(call_sid, TurnState::Processing, TurnState::Terminated);
                return TurnOutcome::hangup_with_text(NO_INPUT_GOODBYE);
            }
            NormalizedUtterance::Present(text) => text,
        };

        let reply_text = match self.replies.reply_to(&utterance).await {
            ReplyOutcome::Generated(text) => text,
            ReplyOutcome::Failed(reason) => {
                tracing::info!(call_sid, %reason, "substituting apology reply");
                APOLOGY_REPLY.to_string()
            }
        };

        self.transition(call_sid, TurnState::Processing, TurnState::Responding);
        let reply_spoken = self.speak(&reply_text).await;

        // The continuation decision looks at the caller's words, never at
        // the generated reply.
        let outcome = if wants_to_end(&utterance) {
            self.transition(call_sid, TurnState::Responding, TurnState::Terminated);
            let goodbye = self.speak(TERMINATION_GOODBYE).await;
            TurnOutcome {
                spoken: vec![reply_spoken, goodbye],
                action: CallAction::Hangup,
            }
        } else {
            self.transition(call_sid, TurnState::Responding, TurnState::Continuing);
            // A reply that already asks a question needs no extra prompt.
            let prompt = if reply_text.trim().ends_with('?') {
                None
            } else {
                Some(FOLLOW_UP_PROMPT.to_string())
            };
            TurnOutcome {
                spoken: vec![reply_spoken],
                action: CallAction::Listen {
                    timeout_secs: TURN_GATHER_TIMEOUT_SECS,
                    prompt,
                },
            }
        };

        self.record(input.call_sid, utterance, reply_text);
        outcome
    }

    /// Render text to audio, falling back to spoken markup of the same
    /// text when synthesis is unavailable.
    async fn speak(&self, text: &str) -> SpokenOutput {
        match self.speech.render(text).await {
            RenderOutcome::Audio(clip) => SpokenOutput::Audio(clip),
            RenderOutcome::Unavailable => SpokenOutput::Text(text.to_string()),
        }
    }

    /// Hand the (utterance, reply) pair to the recorder off the critical
    /// path. Failures are logged and swallowed; the outcome is already
    /// computed and must not change.
    fn record(&self, call_sid: Option<String>, utterance: String, reply: String) {
        let log = Arc::clone(&self.log);
        let entry = InteractionEntry::now(call_sid, utterance, reply);
        tokio::spawn(async move {
            if let Err(e) = log.record(entry).await {
                tracing::warn!(error = %e, "interaction record dropped");
            }
        });
    }

    fn transition(&self, call_sid: &str, from: TurnState, to: TurnState) {
        tracing::debug!(call_sid, %from, %to, "turn state transition");
    }
}
