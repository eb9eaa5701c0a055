//! Application state
//!
//! Shared across all handlers. Everything here is read-only after startup
//! (settings) or internally synchronized (clip store), so concurrent turns
//! never contend on turn-level state.

use std::sync::Arc;

use call_agent_agent::TurnDirector;
use call_agent_config::Settings;
use call_agent_core::InteractionLog;
use call_agent_llm::{LlmReplyGenerator, OpenAiBackend, OpenAiConfig};
use call_agent_recorder::{JsonlInteractionLog, NullInteractionLog};
use call_agent_synthesis::{ClipStore, ElevenLabsClient, ElevenLabsConfig, HttpSpeechRenderer};

use crate::ServerError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only settings, fixed at startup
    pub settings: Arc<Settings>,
    /// The turn orchestrator
    pub director: Arc<TurnDirector>,
    /// Synthesized audio clips awaiting pickup by the telephony provider
    pub clips: Arc<ClipStore>,
}

impl AppState {
    /// Assemble state from pre-built parts (used by tests to inject fakes)
    pub fn new(settings: Settings, director: Arc<TurnDirector>, clips: Arc<ClipStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            director,
            clips,
        }
    }

    /// Wire the real backends from settings.
    ///
    /// Missing API keys do not fail here: the backends report them per
    /// request and turns degrade to the spoken fallbacks.
    pub fn from_settings(settings: Settings) -> Result<Self, ServerError> {
        let clips = Arc::new(ClipStore::new());

        let llm_backend = OpenAiBackend::new(OpenAiConfig::from(&settings.llm))
            .map_err(|e| ServerError::Init(e.to_string()))?;
        let replies = Arc::new(LlmReplyGenerator::new(llm_backend));

        let tts_client = ElevenLabsClient::new(ElevenLabsConfig::from(&settings.tts))
            .map_err(|e| ServerError::Init(e.to_string()))?;
        let speech = Arc::new(HttpSpeechRenderer::new(
            tts_client,
            Arc::clone(&clips),
            settings.server.public_url.clone(),
        ));

        let log: Arc<dyn InteractionLog> = if settings.recorder.enabled {
            tracing::info!(path = %settings.recorder.path, "interaction recorder enabled");
            Arc::new(JsonlInteractionLog::new(&settings.recorder.path))
        } else {
            tracing::info!("interaction recorder disabled");
            Arc::new(NullInteractionLog)
        };

        let director = Arc::new(TurnDirector::new(replies, speech, log));

        Ok(Self {
            settings: Arc::new(settings),
            director,
            clips,
        })
    }
}
