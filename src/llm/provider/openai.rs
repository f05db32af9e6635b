use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{NetworkConfig, ProviderConfig};
use crate::constants::llm as llm_constants;
use crate::error::{BrevError, Result};
use crate::llm::{ChatMessage, LLMProvider};

const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com";
const OPENAI_API_SUFFIX: &str = "/v1/chat/completions";

/// OpenAI (and OpenAI-compatible) chat-completions provider.
pub struct OpenAIProvider {
    client: Client,
    name: String,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

impl OpenAIProvider {
    pub fn new(
        config: &ProviderConfig,
        name: &str,
        network_config: &NetworkConfig,
    ) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                BrevError::Config(format!("API key not found for provider '{}'", name))
            })?;

        let base = config.endpoint.as_deref().unwrap_or(DEFAULT_OPENAI_BASE);
        let endpoint = format!("{}{}", base.trim_end_matches('/'), OPENAI_API_SUFFIX);

        Ok(Self {
            client: super::create_http_client(network_config)?,
            name: name.to_string(),
            api_key,
            endpoint,
            model: config
                .model
                .clone()
                .unwrap_or_else(|| crate::config::ApiStyle::OpenAI.default_model().to_string()),
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
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = OpenAIRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            "OpenAI API request: model={}, temperature={}, max_tokens={}",
            self.model,
            self.temperature,
            self.max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        tracing::debug!("OpenAI API response status: {}", status);

        if !status.is_success() {
            return Err(BrevError::Llm(format!(
                "OpenAI API error ({}): {}",
                status, response_text
            )));
        }

        let response_body: OpenAIResponse = serde_json::from_str(&response_text).map_err(|e| {
            BrevError::Llm(format!(
                "Failed to parse OpenAI response: {}. Raw response: {}",
                e, response_text
            ))
        })?;

        let text = response_body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| BrevError::Llm("OpenAI response contained no choices".to_string()))?;

        Ok(text)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(BrevError::Config("API key is empty".to_string()));
        }
        Ok(())
    }
}
