//! Speech renderer: TTS with the text fallback policy applied

use std::sync::Arc;

use async_trait::async_trait;

use call_agent_core::{AudioClip, RenderOutcome, SpeechRenderer};

use crate::client::ElevenLabsClient;
use crate::clips::ClipStore;

/// [`SpeechRenderer`] backed by the HTTP TTS client.
///
/// On success the clip lands in the [`ClipStore`] and the outcome carries
/// the URL the telephony provider will fetch. On any failure the outcome is
/// `Unavailable` and the director speaks the same text through markup
/// instead; no generic error phrase is ever substituted here.
pub struct HttpSpeechRenderer {
    client: ElevenLabsClient,
    clips: Arc<ClipStore>,
    /// Public base URL of this service, e.g. "https://agent.example.com"
    public_url: String,
}

impl HttpSpeechRenderer {
    pub fn new(client: ElevenLabsClient, clips: Arc<ClipStore>, public_url: impl Into<String>) -> Self {
        let public_url = public_url.into();
        Self {
            client,
            clips,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    fn clip_url(&self, id: &uuid::Uuid) -> String {
        format!("{}/audio/{id}", self.public_url)
    }
}

#[async_trait]
impl SpeechRenderer for HttpSpeechRenderer {
    async fn render(&self, text: &str) -> RenderOutcome {
        match self.client.synthesize(text).await {
            Ok(audio) => {
                let id = self.clips.insert(audio);
                let url = self.clip_url(&id);
                tracing::debug!(clip = %id, chars = text.len(), "synthesized reply audio");
                RenderOutcome::Audio(AudioClip { id, url })
            }
            Err(e) => {
                tracing::warn!(error = %e, "speech synthesis failed, falling back to spoken markup");
                RenderOutcome::Unavailable
            }
        }
    }
}
