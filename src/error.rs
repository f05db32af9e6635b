use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrevError>;

#[derive(Error, Debug)]
pub enum BrevError {
    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),
}

impl BrevError {
    /// Actionable hint for common failures, shown alongside the error message.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            BrevError::Config(msg) if msg.contains("API key not found") => Some(
                "Add 'api_key = \"sk-...\"' to [llm.providers.openai] in ~/.config/brev/config.toml, or set OPENAI_API_KEY",
            ),
            BrevError::Config(msg) if msg.contains("branch") => {
                Some("Set 'branch = \"<name>\"' under [review] in ~/.config/brev/config.toml")
            }
            BrevError::Config(msg) if msg.contains("not found in config") => {
                Some("Check [llm.providers.<name>] in ~/.config/brev/config.toml")
            }
            BrevError::GitCommand(_) => {
                Some("Check that repo_path points at a git repository and the branch names exist")
            }
            BrevError::Network(_) => {
                Some("Check your network connection, proxy settings, or API endpoint configuration")
            }
            BrevError::Llm(msg) if msg.contains("401") => {
                Some("Check if your API key is valid and has not expired")
            }
            BrevError::Llm(msg) if msg.contains("429") => {
                Some("Rate limit exceeded. Wait a moment and try again")
            }
            BrevError::Llm(msg) if msg.contains("500") || msg.contains("503") => {
                Some("API service is temporarily unavailable. Try again in a few moments")
            }
            _ => None,
        }
    }
}
