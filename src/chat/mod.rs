//! Paralympic sports chat assistant.
//!
//! The web layer sends the conversation to a [`ChatModel`] along with the
//! fixed [`SYSTEM_PROMPT`]. The production model is [`GeminiClient`].

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persona and domain instruction sent with every conversation.
pub const SYSTEM_PROMPT: &str = "\
You are a knowledgeable assistant specializing in Paralympic sports and disability athletics. You have extensive knowledge about:

- Paralympic sports classifications and categories
- Paralympic history and events
- Adaptive sports equipment and techniques
- Paralympic athletes and their achievements
- Upcoming Paralympic events and competitions
- Rules and regulations for Paralympic sports
- Training methods for Paralympic athletes
- Accessibility in sports
- Disability sport organizations and governance

Provide accurate, helpful, and encouraging responses about Paralympic sports. Keep responses concise but informative. If you're unsure about specific current information like recent results or upcoming event dates, acknowledge this and suggest checking official Paralympic sources.

Always maintain a positive and inclusive tone when discussing disability sports and athletes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Token accounting reported by the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat is not configured: GEMINI_API_KEY is not set")]
    NotConfigured,
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to the language model failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("language model returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("language model returned no text")]
    EmptyResponse,
    #[error("unexpected language model response: {0}")]
    Decode(String),
}

impl ChatError {
    /// Short machine-readable name, reported to API callers.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "NotConfigured",
            Self::Client(_) => "ClientError",
            Self::Request(_) => "RequestError",
            Self::Api { .. } => "ApiError",
            Self::EmptyResponse => "EmptyResponse",
            Self::Decode(_) => "DecodeError",
        }
    }
}

/// A hosted language model that continues a conversation.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, system: &str, messages: &[ChatMessage])
        -> Result<ChatReply, ChatError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_decode_lowercase() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
        assert_eq!(message.role, ChatRole::Assistant);
        assert!(serde_json::from_str::<ChatMessage>(r#"{"role":"system","content":"x"}"#).is_err());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ChatError::NotConfigured.kind(), "NotConfigured");
        assert_eq!(
            ChatError::Api {
                status: 403,
                message: "bad key".to_string()
            }
            .kind(),
            "ApiError"
        );
    }

    #[test]
    fn test_system_prompt_mentions_domain() {
        assert!(SYSTEM_PROMPT.starts_with("You are a knowledgeable assistant"));
        assert!(SYSTEM_PROMPT.contains("Paralympic sports classifications"));
    }
}
