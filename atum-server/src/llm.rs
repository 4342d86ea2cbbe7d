//! Generation backends reached over HTTP.

use std::sync::Arc;

use atum_core::{
    AtumError, CodeGenerationRequest, CodeGenerationResponse, GenerateDocsRequest,
    GenerateDocsResponse, GenerateTestsRequest, GenerateTestsResponse, Generator,
    OfflineGenerator,
};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::config::{LlmConfig, LlmProvider};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: ReplyMessage,
}

#[derive(Debug, Serialize)]
struct OpenAiChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

fn user_message(prompt: &str) -> Vec<ChatMessage<'_>> {
    vec![ChatMessage {
        role: "user",
        content: prompt,
    }]
}

fn check_status(backend: &str, response: Response) -> Result<Response, AtumError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().unwrap_or_default();
    Err(AtumError::Unavailable(format!(
        "{backend} api error ({status}): {body}"
    )))
}

/// Ollama chat API client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    client: Client,
}

impl OllamaClient {
    /// Build a client for an Ollama daemon.
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

impl Generator for OllamaClient {
    fn generate(&self, model: &str, prompt: &str) -> atum_core::Result<String> {
        let url = format!("{}/api/chat", self.base_url.trim_end_matches('/'));
        let body = OllamaChatRequest {
            model,
            messages: user_message(prompt),
            stream: false,
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .map_err(|err| AtumError::Unavailable(format!("ollama request failed: {err}")))?;
        let reply: OllamaChatResponse = check_status("ollama", response)?
            .json()
            .map_err(|err| {
                AtumError::Unavailable(format!("ollama response decode failed: {err}"))
            })?;
        Ok(reply.message.content.unwrap_or_default().trim().to_string())
    }
}

/// OpenAI chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl OpenAiClient {
    /// Build a client for an OpenAI-compatible API.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            client,
        }
    }
}

impl Generator for OpenAiClient {
    fn generate(&self, model: &str, prompt: &str) -> atum_core::Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AtumError::Unavailable("OPENAI_API_KEY is required".to_string()))?;
        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );
        let body = OpenAiChatRequest {
            model,
            messages: user_message(prompt),
        };
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|err| AtumError::Unavailable(format!("openai request failed: {err}")))?;
        let reply: OpenAiChatResponse = check_status("openai", response)?
            .json()
            .map_err(|err| {
                AtumError::Unavailable(format!("openai response decode failed: {err}"))
            })?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AtumError::Unavailable("openai response missing choices".to_string()))?;
        Ok(content.trim().to_string())
    }
}

/// Generation service shared by request handlers.
#[derive(Clone)]
pub struct LlmService {
    generator: Arc<dyn Generator + Send + Sync>,
    model: String,
    provider: LlmProvider,
}

impl LlmService {
    /// Build the service for the configured backend.
    ///
    /// Must run outside the async runtime: it builds a blocking HTTP client.
    pub fn from_config(config: &LlmConfig) -> Result<Self, reqwest::Error> {
        let generator: Arc<dyn Generator + Send + Sync> = match config.provider {
            LlmProvider::Offline => Arc::new(OfflineGenerator),
            LlmProvider::Ollama => Arc::new(OllamaClient::new(
                config.ollama_url.clone(),
                build_client(config)?,
            )),
            LlmProvider::OpenAi => Arc::new(OpenAiClient::new(
                config.openai_url.clone(),
                config.openai_api_key.clone(),
                build_client(config)?,
            )),
        };
        Ok(Self {
            generator,
            model: config.model.clone(),
            provider: config.provider,
        })
    }

    /// Build the service around an explicit generator.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_generator(
        generator: Arc<dyn Generator + Send + Sync>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            model: model.into(),
            provider: LlmProvider::Offline,
        }
    }

    /// Configured backend.
    pub fn provider(&self) -> LlmProvider {
        self.provider
    }

    /// Configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate code for a request.
    pub fn generate_code(&self, request: &CodeGenerationRequest) -> CodeGenerationResponse {
        atum_core::generate_code(self.generator.as_ref(), &self.model, request)
    }

    /// Generate unit tests for a request.
    pub fn generate_tests(&self, request: &GenerateTestsRequest) -> GenerateTestsResponse {
        atum_core::generate_tests(self.generator.as_ref(), &self.model, request)
    }

    /// Generate Markdown documentation for a request.
    pub fn generate_docs(&self, request: &GenerateDocsRequest) -> GenerateDocsResponse {
        atum_core::generate_docs(self.generator.as_ref(), &self.model, request)
    }
}

fn build_client(config: &LlmConfig) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(config.timeout).build()
}
