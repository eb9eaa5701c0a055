//! ElevenLabs-compatible HTTP TTS client

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;

use call_agent_config::TtsSettings;

use crate::SynthesisError;

/// Configuration for the TTS backend
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    /// API endpoint (default https://api.elevenlabs.io)
    pub endpoint: String,
    /// API key; None means synthesis fails per-request and turns degrade
    /// to text-only output
    pub api_key: Option<String>,
    /// Fixed voice identifier used for every clip
    pub voice_id: String,
    /// Request timeout, enforced by the client
    pub timeout: Duration,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.elevenlabs.io".to_string(),
            api_key: None,
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl From<&TtsSettings> for ElevenLabsConfig {
    fn from(settings: &TtsSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            voice_id: settings.voice_id.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }
}

/// HTTP TTS client returning MPEG audio bytes
#[derive(Clone)]
pub struct ElevenLabsClient {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabsClient {
    pub fn new(config: ElevenLabsConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SynthesisError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    fn synthesis_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.voice_id
        )
    }

    /// Synthesize one clip with the fixed voice. Single attempt.
    pub async fn synthesize(&self, text: &str) -> Result<Bytes, SynthesisError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| SynthesisError::Configuration("API key not configured".to_string()))?;

        let body = serde_json::json!({
            "text": text,
            "model_id": "eleven_monolingual_v1",
        });

        let response = self
            .client
            .post(self.synthesis_url())
            .header("xi-api-key", api_key)
            .header("accept", "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Api(format!("status {status}: {detail}")));
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesis_url_includes_voice() {
        let client = ElevenLabsClient::new(ElevenLabsConfig {
            endpoint: "https://api.elevenlabs.io/".to_string(),
            voice_id: "abc123".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.synthesis_url(), "https://api.elevenlabs.io/v1/text-to-speech/abc123");
    }

    #[tokio::test]
    async fn missing_api_key_fails_per_request() {
        let client = ElevenLabsClient::new(ElevenLabsConfig::default()).unwrap();
        let err = client.synthesize("hello").await.unwrap_err();
        assert!(matches!(err, SynthesisError::Configuration(_)));
    }
}
