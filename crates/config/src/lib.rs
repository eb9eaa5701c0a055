//! Configuration for the call agent
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, `config/{env}.yaml`)
//! - Environment variables (`CALL_AGENT_` prefix, `__` separator)
//!
//! Fixed conversation text (persona, prompts, gather timeouts) lives in
//! [`constants`] rather than in `Settings`: those values define the
//! conversation contract and are not deployment knobs.

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, LlmSettings, RecorderSettings, RuntimeEnvironment, ServerSettings, Settings,
    TtsSettings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}
