use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;
use tokio::time::timeout;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::state::actions::AgentRef;

/// HTTP client for the monitor API routes.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /ping`
    pub async fn ping(&self) -> Result<Value, ApiError> {
        let url = self.endpoint(&["ping"])?;
        self.get_json(url).await
    }

    /// `GET /agents`
    pub async fn list_agents(&self) -> Result<Value, ApiError> {
        let url = self.endpoint(&["agents"])?;
        self.get_json(url).await
    }

    /// `GET /agents/{org}:{cn}`
    pub async fn get_agent(&self, agent: &AgentRef) -> Result<Value, ApiError> {
        let url = self.agent_url(agent)?;
        self.get_json(url).await
    }

    /// URL of a single agent.
    ///
    /// The id is already percent-encoded, so it is appended as-is rather than
    /// pushed as a segment, which would escape its `%` a second time.
    pub fn agent_url(&self, agent: &AgentRef) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["agents"])?;
        let path = format!("{}/{}", url.path(), agent.id());
        url.set_path(&path);
        Ok(url)
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, ApiError> {
        match timeout(self.request_timeout, self.do_get(url)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_get(&self, url: Url) -> Result<Value, ApiError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            let message = upstream_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Longest upstream message kept, in characters.
const MAX_UPSTREAM_MESSAGE_CHARS: usize = 200;

/// Extracts a readable message from an error body.
///
/// Prefers the `error` (then `message`) field of a JSON object, otherwise
/// the raw text. Returns `None` for an empty body. The result is cut to
/// `MAX_UPSTREAM_MESSAGE_CHARS`.
fn upstream_message(body: &[u8]) -> Option<String> {
    if let Ok(Value::Object(obj)) = serde_json::from_slice::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(message)) = obj.get(key) {
                return Some(truncate_message(message.trim()));
            }
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    (!text.is_empty()).then(|| truncate_message(text))
}

fn truncate_message(message: &str) -> String {
    match message.char_indices().nth(MAX_UPSTREAM_MESSAGE_CHARS) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}
