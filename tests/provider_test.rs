//! Provider HTTP tests against a mock server.

use mockito::Server;

use brev::config::{NetworkConfig, ProviderConfig};
use brev::error::BrevError;
use brev::llm::LLMProvider;
use brev::llm::message::ChatMessage;
use brev::llm::provider::ollama::OllamaProvider;
use brev::llm::provider::openai::OpenAIProvider;

fn provider_config(server_url: String) -> ProviderConfig {
    ProviderConfig {
        api_style: None,
        endpoint: Some(server_url),
        api_key: Some("sk-test".to_string()),
        model: Some("gpt-4o-mini".to_string()),
        max_tokens: None,
        temperature: None,
    }
}

fn messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a reviewer."),
        ChatMessage::user("```<git diff>\n+line\n</git diff>```"),
    ]
}

#[tokio::test]
async fn test_openai_complete_returns_first_choice_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"<review>Fine.</review>"}}]}"#)
        .create_async()
        .await;

    let provider =
        OpenAIProvider::new(&provider_config(server.url()), "openai", &NetworkConfig::default())
            .unwrap();

    let text = provider.complete(&messages()).await.unwrap();
    assert_eq!(text, "<review>Fine.</review>");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_complete_error_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid key"}}"#)
        .create_async()
        .await;

    let provider =
        OpenAIProvider::new(&provider_config(server.url()), "openai", &NetworkConfig::default())
            .unwrap();

    let err = provider.complete(&messages()).await.unwrap_err();
    assert!(matches!(err, BrevError::Llm(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_openai_complete_malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let provider =
        OpenAIProvider::new(&provider_config(server.url()), "openai", &NetworkConfig::default())
            .unwrap();

    let err = provider.complete(&messages()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[tokio::test]
async fn test_openai_complete_empty_choices() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let provider =
        OpenAIProvider::new(&provider_config(server.url()), "openai", &NetworkConfig::default())
            .unwrap();

    let err = provider.complete(&messages()).await.unwrap_err();
    assert!(err.to_string().contains("no choices"));
}

#[test]
fn test_openai_requires_api_key() {
    // No config key; clear the env fallback for this check.
    let had_env = std::env::var("OPENAI_API_KEY").is_ok();
    if had_env {
        // Skip instead of mutating shared env in a parallel test run.
        return;
    }
    let config = ProviderConfig {
        api_key: None,
        ..provider_config("http://localhost".to_string())
    };
    let result = OpenAIProvider::new(&config, "openai", &NetworkConfig::default());
    assert!(matches!(result, Err(BrevError::Config(_))));
}

#[tokio::test]
async fn test_ollama_complete_returns_message_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/chat")
        .with_status(200)
        .with_body(r#"{"message":{"role":"assistant","content":"Looks good."}}"#)
        .create_async()
        .await;

    let config = ProviderConfig {
        api_key: None,
        ..provider_config(server.url())
    };
    let provider = OllamaProvider::new(&config, "ollama", &NetworkConfig::default()).unwrap();

    let text = provider.complete(&messages()).await.unwrap();
    assert_eq!(text, "Looks good.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ollama_complete_error_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/chat")
        .with_status(500)
        .with_body("model not found")
        .create_async()
        .await;

    let config = ProviderConfig {
        api_key: None,
        ..provider_config(server.url())
    };
    let provider = OllamaProvider::new(&config, "ollama", &NetworkConfig::default()).unwrap();

    let err = provider.complete(&messages()).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}
