use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{NetworkConfig, ProviderConfig};
use crate::constants::llm as llm_constants;
use crate::error::{BrevError, Result};
use crate::llm::{ChatMessage, LLMProvider};

const DEFAULT_OLLAMA_BASE: &str = "http://localhost:11434";
const OLLAMA_API_SUFFIX: &str = "/api/chat";

/// Ollama local model provider. No API key required.
pub struct OllamaProvider {
    client: Client,
    name: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
}

#[derive(Deserialize)]
struct OllamaMessage {
    content: String,
}

impl OllamaProvider {
    pub fn new(
        config: &ProviderConfig,
        name: &str,
        network_config: &NetworkConfig,
    ) -> Result<Self> {
        let base = config.endpoint.as_deref().unwrap_or(DEFAULT_OLLAMA_BASE);
        let endpoint = format!("{}{}", base.trim_end_matches('/'), OLLAMA_API_SUFFIX);

        Ok(Self {
            client: super::create_http_client(network_config)?,
            name: name.to_string(),
            endpoint,
            model: config
                .model
                .clone()
                .unwrap_or_else(|| crate::config::ApiStyle::Ollama.default_model().to_string()),
            max_tokens: config
                .max_tokens
                .unwrap_or(llm_constants::DEFAULT_MAX_TOKENS),
            temperature: config
                .temperature
                .unwrap_or(llm_constants::DEFAULT_TEMPERATURE),
        })
    }
}

#[async_trait]
impl LLMProvider for OllamaProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = OllamaRequest {
            model: &self.model,
            messages,
            stream: false,
            options: OllamaOptions {
                temperature: self.temperature,
                num_predict: self.max_tokens,
            },
        };

        tracing::debug!("Ollama API request: model={}", self.model);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(BrevError::Llm(format!(
                "Ollama API error ({}): {}",
                status, response_text
            )));
        }

        let response_body: OllamaResponse = serde_json::from_str(&response_text).map_err(|e| {
            BrevError::Llm(format!(
                "Failed to parse Ollama response: {}. Raw response: {}",
                e, response_text
            ))
        })?;

        Ok(response_body.message.content)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
