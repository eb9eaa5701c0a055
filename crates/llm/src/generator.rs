//! Reply generator: persona-pinned wrapper over the completion backend

use async_trait::async_trait;

use call_agent_config::constants::{MAX_REPLY_TOKENS, PERSONA};
use call_agent_core::{ReplyGenerator, ReplyOutcome};

use crate::backend::OpenAiBackend;

/// [`ReplyGenerator`] backed by an OpenAI-compatible completion API.
///
/// Pins the fixed receptionist persona and the reply-length cap; any
/// backend failure becomes `ReplyOutcome::Failed` so the turn director can
/// substitute the fixed apology. Single attempt, no retries.
pub struct LlmReplyGenerator {
    backend: OpenAiBackend,
}

impl LlmReplyGenerator {
    pub fn new(backend: OpenAiBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl ReplyGenerator for LlmReplyGenerator {
    async fn reply_to(&self, utterance: &str) -> ReplyOutcome {
        match self.backend.complete(PERSONA, utterance, MAX_REPLY_TOKENS).await {
            Ok(text) => {
                tracing::debug!(model = self.backend.model_name(), chars = text.len(), "reply generated");
                ReplyOutcome::Generated(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "reply generation failed, falling back to apology");
                ReplyOutcome::Failed(e.to_string())
            }
        }
    }
}
