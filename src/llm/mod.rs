//! LLM abstractions, shared types, and provider implementations.

/// Chat message types shared by all backends.
pub mod message;
/// Fixed review prompt and message construction.
pub mod prompt;
/// Built-in provider implementations and factory helpers.
pub mod provider;

use async_trait::async_trait;

use crate::error::Result;

pub use message::{ChatMessage, Role};

/// Unified interface implemented by all LLM providers.
///
/// The only required method is [`complete`](Self::complete), which sends an
/// ordered list of role/content messages and returns the first choice's text.
/// Implementations handle authentication, wire format, and response parsing
/// for their backend.
///
/// # Built-in implementations
/// - [`OpenAIProvider`](provider::openai::OpenAIProvider) - OpenAI/compatible API
/// - [`OllamaProvider`](provider::ollama::OllamaProvider) - Ollama local model
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends the messages to the model and returns the generated text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Provider name (used for logs and error messages).
    fn name(&self) -> &str;

    /// Validates provider configuration.
    fn validate(&self) -> Result<()>;
}
