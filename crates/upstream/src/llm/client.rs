use std::time::Duration;

use async_trait::async_trait;
use icebreak_common::error::IcebreakResult;
use icebreak_config::LlmConfig;
use reqwest::Client;

use super::models::{ChatMessage, ChatRequest, ChatResponse};
use super::ChatModel;
use crate::error::UpstreamError;

/// OpenAI-compatible `/chat/completions` client.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    config: LlmConfig,
}

impl ChatClient {
    pub fn new(config: LlmConfig) -> Result<Self, UpstreamError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(UpstreamError::MissingCredentials("GMI_API_KEY"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// For testing: point the client at a specific base URL (e.g., wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    pub async fn chat(&self, system: &str, prompt: &str) -> Result<String, UpstreamError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        tracing::info!(model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "chat completion request failed");
            return Err(UpstreamError::HttpError { status, body });
        }

        let body: ChatResponse = response.json().await?;

        if let Some(usage) = &body.usage {
            tracing::info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion received"
            );
        }

        body.first_content().map(str::to_owned).ok_or_else(|| {
            tracing::error!(choices = body.choices.len(), "chat completion had no content");
            UpstreamError::UnexpectedShape("unexpected LLM response structure".to_string())
        })
    }
}

#[async_trait]
impl ChatModel for ChatClient {
    async fn complete(&self, system: &str, prompt: &str) -> IcebreakResult<String> {
        Ok(self.chat(system, prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icebreak_common::error::IcebreakError;
    use reqwest::StatusCode;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> LlmConfig {
        LlmConfig {
            api_key: Some("gmi-test".to_string()),
            base_url: "http://localhost".to_string(),
            model: "meta-llama/Llama-3.3-70B-Instruct".to_string(),
            temperature: 0.2,
            max_tokens: 1500,
            timeout_secs: 5,
        }
    }

    fn client_for(server: &MockServer) -> ChatClient {
        ChatClient::new(test_config())
            .unwrap()
            .with_base_url(&server.uri())
    }

    fn completion(content: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
        })
    }

    #[test]
    fn new_requires_api_key() {
        let mut config = test_config();
        config.api_key = None;
        assert!(matches!(
            ChatClient::new(config),
            Err(UpstreamError::MissingCredentials("GMI_API_KEY"))
        ));
    }

    #[tokio::test]
    async fn sends_bearer_auth_and_sampling_settings() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer gmi-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "meta-llama/Llama-3.3-70B-Instruct",
                "temperature": 0.2,
                "max_tokens": 1500,
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "hello" }
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion(serde_json::json!("hi there"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).chat("be brief", "hello").await.unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).chat("s", "p").await.unwrap_err();
        match err {
            UpstreamError::HttpError { status, body } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, "slow down");
            }
            other => panic!("expected HttpError, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_choices_is_unexpected_shape() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let model: &dyn ChatModel = &client;
        let err = model.complete("s", "p").await.unwrap_err();
        assert!(matches!(err, IcebreakError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn null_content_is_unexpected_shape() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion(serde_json::Value::Null)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).chat("s", "p").await.unwrap_err();
        assert!(matches!(err, UpstreamError::UnexpectedShape(_)));
    }
}
