use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::to_chat_json;
use crate::provider::{LlmError, LlmProvider, Message};

pub struct OllamaProvider {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaProvider {
    pub fn new(url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            model,
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn complete(
        &self,
        messages: Vec<Message>,
        temperature: f32,
        _max_tokens: u32,
    ) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.url);

        let body = json!({
            "model": self.model,
            "messages": to_chat_json(&messages),
            "stream": false,
            "options": {
                "temperature": temperature,
            },
        });

        debug!("completion request to {} (model {})", url, self.model);

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, body });
        }

        let resp: serde_json::Value = response.json().await?;
        let content = resp["message"]["content"]
            .as_str()
            .ok_or_else(|| LlmError::ParseError("missing message.content".into()))?;

        Ok(content.to_string())
    }
}
