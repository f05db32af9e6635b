//! Configuration structures.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BrevError, Result};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LLMConfig,
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

impl AppConfig {
    /// Validates the loaded configuration before a run starts.
    pub fn validate(&self) -> Result<()> {
        if self.review.branch.trim().is_empty() {
            return Err(BrevError::Config("review.branch is not set".to_string()));
        }
        for (name, provider) in &self.llm.providers {
            provider.validate(name)?;
        }
        Ok(())
    }
}

/// LLM API backend type.
///
/// Determines which provider implementation to instantiate. If
/// [`ProviderConfig::api_style`] is `None`, the style is inferred from the
/// provider name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStyle {
    /// OpenAI API (and OpenAI-compatible APIs).
    #[serde(rename = "openai")]
    OpenAI,
    /// Ollama local model API.
    Ollama,
}

impl std::fmt::Display for ApiStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiStyle::OpenAI => write!(f, "openai"),
            ApiStyle::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for ApiStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ApiStyle::OpenAI),
            "ollama" => Ok(ApiStyle::Ollama),
            _ => Err(format!("Unknown API style: '{}'", s)),
        }
    }
}

impl ApiStyle {
    /// Default model name for this API style.
    pub fn default_model(&self) -> &'static str {
        match self {
            ApiStyle::OpenAI => "gpt-4o-mini",
            ApiStyle::Ollama => "llama3.2",
        }
    }
}

/// Settings for one entry under `[llm.providers.<name>]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// API style used to select the backend implementation.
    ///
    /// If omitted, it is inferred from the provider name.
    #[serde(default)]
    pub api_style: Option<ApiStyle>,

    /// Custom API endpoint. Each backend has a default.
    pub endpoint: Option<String>,

    /// API key. Required for OpenAI, unused by Ollama.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Model name.
    pub model: Option<String>,

    /// Maximum generated token count.
    pub max_tokens: Option<u32>,

    /// Sampling temperature in `0.0..=2.0`.
    pub temperature: Option<f32>,
}

impl ProviderConfig {
    pub fn validate(&self, name: &str) -> Result<()> {
        if let Some(temp) = self.temperature
            && !(0.0..=2.0).contains(&temp)
        {
            return Err(BrevError::Config(format!(
                "Provider '{}': temperature {} out of range [0.0, 2.0]",
                name, temp
            )));
        }
        if let Some(ref key) = self.api_key
            && key.trim().is_empty()
        {
            return Err(BrevError::Config(format!(
                "Provider '{}': api_key is empty",
                name
            )));
        }
        Ok(())
    }
}

/// LLM provider selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LLMConfig {
    /// Provider name; must match a key under `[llm.providers.<name>]`
    /// (or be a known API style with default settings).
    pub default_provider: String,

    /// Provider settings keyed by provider name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            default_provider: "openai".to_string(),
            providers: HashMap::new(),
        }
    }
}

/// Review run settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewConfig {
    /// Path to the repository to review.
    pub repo_path: PathBuf,

    /// Target branch compared against the default branch. Required.
    #[serde(default)]
    pub branch: String,

    /// Directory that receives `diff.txt` and `comments.txt`.
    pub output_dir: PathBuf,

    /// Override for the built-in review system prompt.
    pub system_prompt: Option<String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            branch: String::new(),
            output_dir: PathBuf::from("code_review_output"),
            system_prompt: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Whole-request timeout in seconds.
    pub request_timeout: u64,

    /// Connect timeout in seconds.
    pub connect_timeout: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout: 120,
            connect_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_temperature_out_of_range() {
        let config = ProviderConfig {
            temperature: Some(3.0),
            ..Default::default()
        };
        assert!(config.validate("openai").is_err());
    }

    #[test]
    fn test_provider_config_empty_api_key() {
        let config = ProviderConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate("openai").is_err());
    }

    #[test]
    fn test_provider_config_valid() {
        let config = ProviderConfig {
            api_key: Some("sk-test".to_string()),
            temperature: Some(0.2),
            ..Default::default()
        };
        assert!(config.validate("openai").is_ok());
    }

    #[test]
    fn test_app_config_requires_branch() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("branch"));
    }

    #[test]
    fn test_api_style_parse() {
        assert_eq!("openai".parse::<ApiStyle>().unwrap(), ApiStyle::OpenAI);
        assert_eq!("Ollama".parse::<ApiStyle>().unwrap(), ApiStyle::Ollama);
        assert!("claude".parse::<ApiStyle>().is_err());
    }
}
