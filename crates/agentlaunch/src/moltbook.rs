//! HTTP client for the Moltbook social platform.
//!
//! Two operations: agent registration (unauthenticated) and post creation
//! (bearer credential). Inputs are passed through verbatim; validation is
//! the orchestration layer's responsibility. No retries here.

use serde_json::Value;

use crate::agent::{Agent, RegisterEnvelope};
use crate::constants::{MOLTBOOK_API, SUBMOLT};
use crate::error::LaunchError;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct MoltbookClient {
    http: reqwest::Client,
    base_url: String,
    submolt: String,
}

impl MoltbookClient {
    /// `base_url` defaults to the production Moltbook API.
    pub fn new(http: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.unwrap_or_else(|| MOLTBOOK_API.to_string()),
            submolt: SUBMOLT.to_string(),
        }
    }

    pub fn with_submolt(mut self, submolt: impl Into<String>) -> Self {
        self.submolt = submolt.into();
        self
    }

    /// Register a new agent identity. Returns the created [`Agent`] with
    /// its one-time claim link and opaque API key.
    pub async fn register_agent(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Agent, LaunchError> {
        let url = format!("{}/agents/register", self.base_url.trim_end_matches('/'));
        let resp = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&serde_json::json!({ "name": name, "description": description }))
            .send()
            .await
            .map_err(|e| LaunchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(upstream_error(
                status.as_u16(),
                resp.json::<Value>().await.ok(),
                "agent registration failed",
            ));
        }

        let envelope: RegisterEnvelope = resp.json().await.map_err(|e| LaunchError::Upstream {
            status: None,
            message: format!("moltbook response parse failed: {e}"),
        })?;

        match envelope {
            RegisterEnvelope {
                success: true,
                agent: Some(agent),
                ..
            } => Ok(agent),
            RegisterEnvelope { error, .. } => Err(LaunchError::Rejected {
                message: error.unwrap_or_else(|| "Registration failed".to_string()),
                post_id: None,
            }),
        }
    }

    /// Create a post in the configured submolt. Returns the raw response
    /// envelope; Moltbook has been observed to place the post id in
    /// several shapes, so extraction is left to [`extract_post_id`].
    pub async fn create_post(
        &self,
        api_key: &str,
        title: &str,
        content: &str,
    ) -> Result<Value, LaunchError> {
        let url = format!("{}/posts", self.base_url.trim_end_matches('/'));
        let resp = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(api_key)
            .json(&serde_json::json!({
                "submolt": self.submolt,
                "title": title,
                "content": content,
            }))
            .send()
            .await
            .map_err(|e| LaunchError::Network(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(LaunchError::RateLimited);
        }
        if !status.is_success() {
            return Err(upstream_error(
                status.as_u16(),
                resp.json::<Value>().await.ok(),
                "post creation failed",
            ));
        }

        resp.json().await.map_err(|e| LaunchError::Upstream {
            status: None,
            message: format!("moltbook response parse failed: {e}"),
        })
    }
}

fn upstream_error(status: u16, body: Option<Value>, context: &str) -> LaunchError {
    let message = body
        .as_ref()
        .and_then(|b| b.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{context} with status {status}"));
    LaunchError::Upstream {
        status: Some(status),
        message,
    }
}

/// Whether a nominally-2xx post envelope actually carries an accepted post.
pub(crate) fn post_accepted(envelope: &Value) -> bool {
    envelope
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false)
        || envelope.get("post").map(|v| !v.is_null()).unwrap_or(false)
        || envelope.get("data").map(|v| !v.is_null()).unwrap_or(false)
}

/// Extract the post id from the first non-null of the three response
/// shapes Moltbook uses: `post.id`, `data.id`, then top-level `id`.
/// Accepts string or numeric ids.
pub fn extract_post_id(envelope: &Value) -> Option<String> {
    [
        envelope.get("post").and_then(|p| p.get("id")),
        envelope.get("data").and_then(|d| d.get("id")),
        envelope.get("id"),
    ]
    .into_iter()
    .flatten()
    .find_map(id_as_string)
}

fn id_as_string(id: &Value) -> Option<String> {
    match id {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
