//! Content backend access.
//!
//! The site talks to a hosted content store through GROQ queries. Everything
//! above this module goes through the [`ContentBackend`] trait so tests can
//! point it at a mock server.

pub mod queries;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::constants::USER_AGENT;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("invalid backend URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected backend response: {0}")]
    Decode(String),
}

/// A store that answers GROQ queries.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Run a query and return its `result` member.
    ///
    /// Parameters are passed by name without the leading `$`.
    async fn query(&self, groq: &str, params: &[(&str, Value)]) -> Result<Value, BackendError>;
}

/// HTTP client for the hosted query API.
pub struct SanityClient {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    description: Option<String>,
}

impl SanityClient {
    /// Build a client from configuration.
    ///
    /// Returns `Ok(None)` when no project is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &Config) -> Result<Option<Self>, BackendError> {
        let Some(base) = config.sanity_base_url() else {
            return Ok(None);
        };
        let endpoint = Url::parse(&format!(
            "{base}/v{}/data/query/{}",
            config.sanity_api_version.trim_start_matches('v'),
            config.sanity_dataset
        ))?;

        let client = Client::builder()
            .timeout(config.sanity_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(BackendError::Client)?;

        Ok(Some(Self {
            client,
            endpoint,
            token: config.sanity_token.clone(),
        }))
    }

    /// Full request URL for a query, with parameters JSON-encoded.
    fn query_url(&self, groq: &str, params: &[(&str, Value)]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", groq);
            for (name, value) in params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl ContentBackend for SanityClient {
    async fn query(&self, groq: &str, params: &[(&str, Value)]) -> Result<Value, BackendError> {
        let url = self.query_url(groq, params);
        debug!(endpoint = %self.endpoint, params = params.len(), "Running backend query");

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(body.result.unwrap_or(Value::Null))
    }
}

/// Human-readable message from an error body, or the body itself.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error: Some(ErrorBody {
                description: Some(description),
            }),
            ..
        }) => description,
        Ok(ErrorResponse {
            message: Some(message),
            ..
        }) => message,
        _ => body.chars().take(200).collect(),
    }
}
