use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::models::tutor::HistoryRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionRole {
    System,
    User,
    Assistant,
}

impl From<HistoryRole> for CompletionRole {
    fn from(role: HistoryRole) -> Self {
        match role {
            HistoryRole::User => CompletionRole::User,
            HistoryRole::Assistant => CompletionRole::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: CompletionRole,
    pub content: String,
}

impl CompletionMessage {
    pub fn new(role: CompletionRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Failures reported by a [`CompletionGateway`].
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway rate limit exceeded")]
    RateLimited,
    #[error("gateway usage limit reached")]
    UsageLimitReached,
    #[error("gateway returned status {status}")]
    Status { status: u16, body: String },
    #[error("gateway transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Source of the bearer secret for the gateway.
pub trait CredentialProvider: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Credential read once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(Option<String>);

impl StaticCredential {
    pub fn new(api_key: Option<String>) -> Self {
        Self(api_key.filter(|key| !key.trim().is_empty()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

/// A chat-completion backend.
///
/// Returns the reply text, or `None` when the upstream answered successfully
/// but carried no usable text.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        messages: &[CompletionMessage],
    ) -> Result<Option<String>, GatewayError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [CompletionMessage],
    max_tokens: u32,
    temperature: f32,
}

/// OpenAI-compatible `POST {url}/chat/completions` client.
pub struct HttpCompletionGateway {
    client: reqwest::Client,
    url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl HttpCompletionGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.url)
    }
}

#[async_trait]
impl CompletionGateway for HttpCompletionGateway {
    async fn complete(
        &self,
        api_key: &str,
        messages: &[CompletionMessage],
    ) -> Result<Option<String>, GatewayError> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::debug!(
            "Calling AI gateway: model={}, messages={}",
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(self.chat_completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        match status.as_u16() {
            429 => return Err(GatewayError::RateLimited),
            402 => return Err(GatewayError::UsageLimitReached),
            _ if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(GatewayError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            _ => {}
        }

        // A body that is not JSON counts as "no usable text".
        let raw: Value = match response.json().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("AI gateway returned an undecodable body: {}", e);
                return Ok(None);
            }
        };

        Ok(extract_reply(&raw))
    }
}

/// Pulls `choices[0].message.content` out of a completion payload.
pub fn extract_reply(raw: &Value) -> Option<String> {
    raw.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c0| c0.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_reply() {
        let raw = json!({
            "choices": [{ "message": { "role": "assistant", "content": "  ¡Hola!  " } }]
        });
        assert_eq!(extract_reply(&raw).as_deref(), Some("  ¡Hola!  "));
    }

    #[test]
    fn test_extract_reply_missing_or_blank() {
        assert_eq!(extract_reply(&json!({})), None);
        assert_eq!(extract_reply(&json!({ "choices": [] })), None);
        assert_eq!(
            extract_reply(&json!({ "choices": [{ "message": { "content": "   " } }] })),
            None
        );
        assert_eq!(
            extract_reply(&json!({ "choices": [{ "message": { "content": null } }] })),
            None
        );
    }

    #[test]
    fn test_static_credential_ignores_blank() {
        assert!(StaticCredential::new(Some("  ".to_string())).api_key().is_none());
        assert_eq!(
            StaticCredential::new(Some("key".to_string())).api_key().as_deref(),
            Some("key")
        );
        assert!(StaticCredential::missing().api_key().is_none());
    }

    #[test]
    fn test_message_serialization() {
        let msg = CompletionMessage::new(CompletionRole::System, "be nice");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "role": "system", "content": "be nice" })
        );
        assert_eq!(CompletionRole::from(HistoryRole::Assistant), CompletionRole::Assistant);
    }

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let gateway = HttpCompletionGateway::new(&GatewayConfig {
            url: "http://localhost:1234/v1/".to_string(),
            ..GatewayConfig::default()
        })
        .unwrap();
        assert_eq!(
            gateway.chat_completions_url(),
            "http://localhost:1234/v1/chat/completions"
        );
    }
}
