pub mod ollama;
pub mod openai;

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::Client;

use crate::config::{ApiStyle, AppConfig, NetworkConfig, ProviderConfig};
use crate::error::{BrevError, Result};
use crate::llm::LLMProvider;

/// Global HTTP client (shared connection pool).
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Gets or creates the global HTTP client.
///
/// The NetworkConfig of the first call determines the timeout settings.
pub(crate) fn create_http_client(network_config: &NetworkConfig) -> Result<Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client.clone());
    }

    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(network_config.request_timeout))
        .connect_timeout(Duration::from_secs(network_config.connect_timeout))
        .build()
        .map_err(|e| BrevError::Llm(format!("Failed to create HTTP client: {}", e)))?;

    let _ = HTTP_CLIENT.set(client.clone());
    Ok(client)
}

/// Creates the LLM provider selected by `llm.default_provider`.
///
/// The provider name selects an entry under `[llm.providers.<name>]`; a name
/// without an entry still works when it matches a known API style, using that
/// style's defaults.
pub fn create_provider(config: &AppConfig) -> Result<Arc<dyn LLMProvider>> {
    let name = config.llm.default_provider.as_str();
    let default_config;
    let provider_config = match config.llm.providers.get(name) {
        Some(c) => c,
        None => {
            default_config = ProviderConfig::default();
            &default_config
        }
    };

    // api_style field wins; otherwise the provider name selects the backend.
    let api_style = match provider_config.api_style {
        Some(style) => style,
        None => name.parse::<ApiStyle>().map_err(|_| {
            BrevError::Config(format!("Provider '{}' not found in config", name))
        })?,
    };

    match api_style {
        ApiStyle::OpenAI => {
            let provider = openai::OpenAIProvider::new(provider_config, name, &config.network)?;
            Ok(Arc::new(provider))
        }
        ApiStyle::Ollama => {
            let provider = ollama::OllamaProvider::new(provider_config, name, &config.network)?;
            Ok(Arc::new(provider))
        }
    }
}
