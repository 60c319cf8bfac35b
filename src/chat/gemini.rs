use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatError, ChatMessage, ChatModel, ChatReply, ChatRole, Usage};
use crate::config::Config;
use crate::constants::USER_AGENT;

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GeminiClient {
    /// Create a client for `model` served from `api_base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_base: &str,
        model: &str,
        api_key: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ChatError::Client)?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{model}:generateContent",
                api_base.trim_end_matches('/')
            ),
            api_key: api_key.into(),
        })
    }

    /// Build a client from configuration, or `None` without an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Option<Self>, ChatError> {
        let Some(key) = config.gemini_api_key.as_deref().map(str::trim) else {
            return Ok(None);
        };
        Self::new(
            &config.gemini_api_base,
            &config.gemini_model,
            key,
            config.gemini_timeout,
        )
        .map(Some)
    }
}

const fn wire_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "model",
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatReply, ChatError> {
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system }],
            },
            contents: messages
                .iter()
                .map(|m| Content {
                    role: Some(wire_role(m.role)),
                    parts: vec![Part { text: &m.content }],
                })
                .collect(),
        };

        debug!(messages = messages.len(), "Sending chat request");
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map_or_else(|_| body.chars().take(200).collect(), |e| e.error.message);
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(ChatError::EmptyResponse);
        }

        let usage = body.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });
        debug!(chars = text.len(), ?usage, "Chat reply received");

        Ok(ChatReply { text, usage })
    }
}
