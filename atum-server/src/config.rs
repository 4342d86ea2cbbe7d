//! Environment-driven configuration for the Atum server.

use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_UI_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";
const DEFAULT_MODEL: &str = "mistral";
const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Origins allowed by CORS.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Build server config from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let host = std::env::var("ATUM_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("ATUM_PORT") {
            Ok(raw) => u16::from_str(raw.trim())
                .map_err(|err| format!("ATUM_PORT must be a u16 number: {err}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let origins =
            std::env::var("ATUM_UI_ORIGINS").unwrap_or_else(|_| DEFAULT_UI_ORIGINS.to_string());
        Ok(Self {
            host,
            port,
            allowed_origins: split_list(&origins),
        })
    }
}

/// Which generation backend to talk to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LlmProvider {
    /// Local Ollama daemon.
    Ollama,
    /// OpenAI-compatible chat completions API.
    OpenAi,
    /// No backend; every request uses its fallback.
    Offline,
}

impl LlmProvider {
    /// Stable identifier used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OpenAi => "openai",
            Self::Offline => "offline",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAi),
            "offline" | "mock" | "none" => Ok(Self::Offline),
            other => Err(format!("unknown LLM provider: {other}")),
        }
    }
}

/// Generation backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Selected backend.
    pub provider: LlmProvider,
    /// Model identifier passed to the backend.
    pub model: String,
    /// Ollama base URL.
    pub ollama_url: String,
    /// OpenAI API base URL.
    pub openai_url: String,
    /// OpenAI API key.
    pub openai_api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl LlmConfig {
    /// Build generation backend config from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let provider = match std::env::var("ATUM_LLM_PROVIDER") {
            Ok(raw) => raw.parse()?,
            Err(_) => LlmProvider::Ollama,
        };
        let timeout_secs = match std::env::var("ATUM_LLM_TIMEOUT_SECS") {
            Ok(raw) => u64::from_str(raw.trim())
                .map_err(|err| format!("ATUM_LLM_TIMEOUT_SECS must be a number: {err}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            provider,
            model: std::env::var("ATUM_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            ollama_url: std::env::var("OLLAMA_HOST")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
            openai_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Offline configuration with default model settings.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn offline() -> Self {
        Self {
            provider: LlmProvider::Offline,
            model: DEFAULT_MODEL.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            openai_url: DEFAULT_OPENAI_URL.to_string(),
            openai_api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect()
}
