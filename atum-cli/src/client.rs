//! Clients for the Atum generation endpoints.

use crate::CliResult;
use atum_core::{
    CodeGenerationRequest, CodeGenerationResponse, GenerateDocsRequest, GenerateDocsResponse,
    GenerateTestsRequest, GenerateTestsResponse, OfflineGenerator,
};
use clap::Args;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const OFFLINE_MODEL: &str = "offline";

/// Where generation requests are sent.
#[cfg_attr(test, allow(dead_code))]
#[derive(Args, Clone, Debug)]
pub struct BackendArgs {
    /// Base URL of the Atum server.
    #[arg(long, env = "ATUM_API_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,
    /// Skip the server and use the built-in fallback templates.
    #[arg(long)]
    pub offline: bool,
}

type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = CliResult<T>> + Send + 'a>>;

/// Generation operations exposed by the Atum server.
pub trait AtumClient {
    /// Generate unit tests.
    fn generate_tests<'a>(
        &'a self,
        request: &'a GenerateTestsRequest,
    ) -> ClientFuture<'a, GenerateTestsResponse>;

    /// Generate Markdown documentation.
    fn generate_docs<'a>(
        &'a self,
        request: &'a GenerateDocsRequest,
    ) -> ClientFuture<'a, GenerateDocsResponse>;

    /// Generate source code.
    fn generate_code<'a>(
        &'a self,
        request: &'a CodeGenerationRequest,
    ) -> ClientFuture<'a, CodeGenerationResponse>;
}

/// Reqwest-backed client for a running Atum server.
#[cfg_attr(test, allow(dead_code))]
pub struct ReqwestAtumClient {
    client: Client,
    server_url: String,
}

#[cfg_attr(test, allow(dead_code))]
impl ReqwestAtumClient {
    /// Build a client for the given server.
    pub fn new(server_url: &str) -> CliResult<Self> {
        let client = Client::builder().user_agent("atum-cli").build()?;
        Ok(Self {
            client,
            server_url: normalize_server_url(server_url)?,
        })
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> CliResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.server_url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<R>().await?)
    }
}

impl AtumClient for ReqwestAtumClient {
    fn generate_tests<'a>(
        &'a self,
        request: &'a GenerateTestsRequest,
    ) -> ClientFuture<'a, GenerateTestsResponse> {
        Box::pin(self.post_json("/api/v1/generate-tests", request))
    }

    fn generate_docs<'a>(
        &'a self,
        request: &'a GenerateDocsRequest,
    ) -> ClientFuture<'a, GenerateDocsResponse> {
        Box::pin(self.post_json("/api/v1/generate-docs", request))
    }

    fn generate_code<'a>(
        &'a self,
        request: &'a CodeGenerationRequest,
    ) -> ClientFuture<'a, CodeGenerationResponse> {
        Box::pin(self.post_json("/generate", request))
    }
}

/// Runs the core operations locally with no generation backend.
pub struct OfflineClient;

impl AtumClient for OfflineClient {
    fn generate_tests<'a>(
        &'a self,
        request: &'a GenerateTestsRequest,
    ) -> ClientFuture<'a, GenerateTestsResponse> {
        Box::pin(async move {
            Ok(atum_core::generate_tests(
                &OfflineGenerator,
                OFFLINE_MODEL,
                request,
            ))
        })
    }

    fn generate_docs<'a>(
        &'a self,
        request: &'a GenerateDocsRequest,
    ) -> ClientFuture<'a, GenerateDocsResponse> {
        Box::pin(async move {
            Ok(atum_core::generate_docs(
                &OfflineGenerator,
                OFFLINE_MODEL,
                request,
            ))
        })
    }

    fn generate_code<'a>(
        &'a self,
        request: &'a CodeGenerationRequest,
    ) -> ClientFuture<'a, CodeGenerationResponse> {
        Box::pin(async move {
            Ok(atum_core::generate_code(
                &OfflineGenerator,
                OFFLINE_MODEL,
                request,
            ))
        })
    }
}

/// Normalize a server base URL.
fn normalize_server_url(server_url: &str) -> CliResult<String> {
    let trimmed = server_url.trim();
    if trimmed.is_empty() {
        return Err("server url is required".into());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_url_trims_trailing_slash() {
        let url = normalize_server_url("http://localhost:8000/").expect("url");
        assert_eq!(url, "http://localhost:8000");
    }

    #[test]
    fn normalize_server_url_rejects_empty() {
        let err = normalize_server_url("   ").unwrap_err();
        assert!(err.to_string().contains("server url"));
    }

    #[tokio::test]
    async fn offline_client_returns_fallback_tests() {
        let request = GenerateTestsRequest {
            code: "def add(a, b): return a + b".to_string(),
            language: "python".to_string(),
            framework: "unittest".to_string(),
        };
        let response = OfflineClient
            .generate_tests(&request)
            .await
            .expect("response");
        assert!(response.ok);
        assert!(response.tests.contains("class TestGeneratedCode(unittest.TestCase):"));
        assert!(response.notes[0].starts_with("Generated using fallback method"));
    }

    #[tokio::test]
    async fn offline_client_validates_requests() {
        let request = CodeGenerationRequest {
            query: " ".to_string(),
            language: "go".to_string(),
        };
        let response = OfflineClient
            .generate_code(&request)
            .await
            .expect("response");
        assert!(!response.ok);
        assert_eq!(response.notes, vec!["Error: Query cannot be empty".to_string()]);
    }
}
