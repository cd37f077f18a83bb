//! Ollama API client implementation for generation and model discovery.
//!
//! This module provides integration with a local Ollama server through its
//! `/api/generate` and `/api/tags` endpoints.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::BenchError;
use crate::generation::{GenerationProvider, GenerationResult};

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

/// Configuration for the Ollama client.
#[derive(Debug)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Sampling temperature, kept low for logic/math determinism.
    pub temperature: f32,
    /// Token budget per response, sized for coding/reasoning answers.
    pub num_predict: u32,
}

/// Client for a local Ollama server.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct Ollama {
    /// Shared configuration wrapped in Arc for cheap cloning.
    pub config: Arc<OllamaConfig>,
    /// HTTP client for making requests.
    pub client: Client,
}

#[derive(Serialize)]
struct OllamaGenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    /// Asks the server to constrain output to JSON; models do not always
    /// comply, which is why the response parser tolerates prose.
    format: &'a str,
    options: OllamaGenerateOptions,
}

#[derive(Deserialize, Debug)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Deserialize, Debug)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<OllamaModelTag>,
}

#[derive(Deserialize, Debug)]
struct OllamaModelTag {
    name: String,
}

impl Ollama {
    pub fn new(base_url: Option<String>, timeout_seconds: Option<u64>) -> Self {
        let timeout = timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .expect("Failed to build reqwest Client");
        Self::with_client(client, base_url, Some(timeout))
    }

    /// Creates a new Ollama client with a custom HTTP client.
    pub fn with_client(
        client: Client,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            config: Arc::new(OllamaConfig {
                base_url,
                timeout_seconds: timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
                temperature: 0.1,
                num_predict: 1024,
            }),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.config.timeout_seconds
    }

    async fn request_generation(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<String, BenchError> {
        let body = OllamaGenerateRequest {
            model,
            prompt,
            stream: false,
            format: "json",
            options: OllamaGenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.num_predict,
            },
        };

        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("Ollama request payload: {json}");
            }
        }

        let resp = self
            .client
            .post(format!("{}/api/generate", self.config.base_url))
            .json(&body)
            .send()
            .await?;

        log::debug!("Ollama HTTP status: {}", resp.status());

        let resp = resp.error_for_status()?;
        let json_resp: OllamaGenerateResponse = resp.json().await?;
        Ok(json_resp.response)
    }
}

#[async_trait]
impl GenerationProvider for Ollama {
    /// Sends a single prompt to the model, timing the full round trip.
    ///
    /// One attempt only. Timeouts and transport errors come back as a failed
    /// [`GenerationResult`] with the error message captured.
    async fn generate(&self, model: &str, prompt: &str) -> GenerationResult {
        let start = Instant::now();
        match self.request_generation(model, prompt).await {
            Ok(text) => GenerationResult::ok(text, start.elapsed()),
            Err(err) => GenerationResult::failed(err.to_string(), start.elapsed()),
        }
    }

    async fn list_models(&self) -> Result<Vec<String>, BenchError> {
        let resp = self
            .client
            .get(format!("{}/api/tags", self.config.base_url))
            .send()
            .await?
            .error_for_status()?;

        let tags: OllamaTagsResponse = resp.json().await?;
        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}
