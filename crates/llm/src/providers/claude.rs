use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::role_name;
use crate::provider::{LlmError, LlmProvider, Message, Role};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct ClaudeProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl ClaudeProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl LlmProvider for ClaudeProvider {
    async fn complete(
        &self,
        messages: Vec<Message>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        // The Anthropic API takes the system instruction as a top-level
        // parameter, not as a message.
        let (system, chat): (Vec<Message>, Vec<Message>) = messages
            .into_iter()
            .partition(|m| matches!(m.role, Role::System));

        let api_messages: Vec<serde_json::Value> = chat
            .iter()
            .map(|m| {
                json!({
                    "role": role_name(&m.role),
                    "content": m.content,
                })
            })
            .collect();

        let mut body = json!({
            "model": self.model,
            "messages": api_messages,
            "temperature": temperature,
            "max_tokens": max_tokens,
        });

        if let Some(system_msg) = system.first() {
            body["system"] = json!(system_msg.content);
        }

        debug!("completion request to {} (model {})", API_URL, self.model);

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        let content = resp["content"][0]["text"]
            .as_str()
            .ok_or_else(|| LlmError::ParseError("missing content[0].text".into()))?;

        Ok(content.to_string())
    }
}
