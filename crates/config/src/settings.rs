//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GREETING, DEFAULT_SAY_VOICE};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Language-model backend configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// Speech-synthesis backend configuration
    #[serde(default)]
    pub tts: TtsSettings,

    /// Interaction recorder configuration
    #[serde(default)]
    pub recorder: RecorderSettings,

    /// Log filter level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: RuntimeEnvironment::default(),
            server: ServerSettings::default(),
            llm: LlmSettings::default(),
            tts: TtsSettings::default(),
            recorder: RecorderSettings::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Publicly reachable base URL, used to build audio clip URLs the
    /// telephony provider fetches (e.g. "https://agent.example.com")
    #[serde(default = "default_public_url")]
    pub public_url: String,

    /// Greeting spoken when a call first connects
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Telephony-side voice for spoken markup
    #[serde(default = "default_say_voice")]
    pub say_voice: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_public_url() -> String {
    std::env::var("CALL_AGENT_PUBLIC_URL").unwrap_or_else(|_| "http://localhost:5001".to_string())
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_say_voice() -> String {
    DEFAULT_SAY_VOICE.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: default_public_url(),
            greeting: default_greeting(),
            say_voice: default_say_voice(),
        }
    }
}

/// Language-model backend settings
///
/// A missing API key is not a startup error: the backend reports it as a
/// per-request failure and the turn falls back to the fixed apology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// OpenAI-compatible API endpoint
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// API key; picked up from OPENAI_API_KEY when not set in files
    #[serde(default = "default_llm_api_key")]
    pub api_key: Option<String>,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Request timeout in seconds, enforced by the client
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_api_key() -> Option<String> {
    std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty())
}

fn default_llm_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_backend_timeout_secs() -> u64 {
    10
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            api_key: default_llm_api_key(),
            model: default_llm_model(),
            timeout_secs: default_backend_timeout_secs(),
        }
    }
}

/// Speech-synthesis backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsSettings {
    /// ElevenLabs-compatible API endpoint
    #[serde(default = "default_tts_endpoint")]
    pub endpoint: String,

    /// API key; picked up from ELEVENLABS_API_KEY when not set in files
    #[serde(default = "default_tts_api_key")]
    pub api_key: Option<String>,

    /// Voice identifier
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Request timeout in seconds, enforced by the client
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_tts_endpoint() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_tts_api_key() -> Option<String> {
    std::env::var("ELEVENLABS_API_KEY").ok().filter(|k| !k.trim().is_empty())
}

fn default_voice_id() -> String {
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

impl Default for TtsSettings {
    fn default() -> Self {
        Self {
            endpoint: default_tts_endpoint(),
            api_key: default_tts_api_key(),
            voice_id: default_voice_id(),
            timeout_secs: default_backend_timeout_secs(),
        }
    }
}

/// Interaction recorder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderSettings {
    /// Enable the append-only interaction log
    #[serde(default = "default_recorder_enabled")]
    pub enabled: bool,

    /// Path of the JSONL log file
    #[serde(default = "default_recorder_path")]
    pub path: String,
}

fn default_recorder_enabled() -> bool {
    true
}

fn default_recorder_path() -> String {
    "interactions.jsonl".to_string()
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            enabled: default_recorder_enabled(),
            path: default_recorder_path(),
        }
    }
}

/// Load settings from files and environment.
///
/// Priority: env vars > `config/{env}.yaml` > `config/default.yaml` > defaults.
/// Missing files are fine; defaults cover everything.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{env_name}")).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("CALL_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    config
        .try_deserialize()
        .map_err(|e| ConfigError::Parse(e.to_string()))
}
