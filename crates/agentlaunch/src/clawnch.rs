//! Retrying HTTP client for the Clawnch launch service.
//!
//! The launch endpoint is the only call wrapped in retries: the upstream
//! service has known transient unavailability windows. Network-class
//! failures and 5xx responses are retried up to [`MAX_LAUNCH_ATTEMPTS`]
//! total attempts with linear backoff (2 s, then 4 s); client errors
//! propagate immediately. Post creation is never retried here.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::constants::{CLAWNCH_API, LAUNCH_TIMEOUT_SECS, MAX_LAUNCH_ATTEMPTS};
use crate::error::LaunchError;
use crate::token::ClawnchLaunch;

#[derive(Debug, Clone)]
pub struct ClawnchClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClawnchClient {
    /// `base_url` defaults to the production Clawnch API.
    pub fn new(http: reqwest::Client, base_url: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.unwrap_or_else(|| CLAWNCH_API.to_string()),
        }
    }

    /// Trigger the launch workflow for an existing post. Retries per the
    /// module policy; returns the parsed response body, whose `success`
    /// flag the caller still has to interpret.
    pub async fn launch(
        &self,
        api_key: &str,
        post_id: &str,
    ) -> Result<ClawnchLaunch, LaunchError> {
        let client = self;
        launch_with_retry(move |attempt| {
            tracing::info!(attempt, post_id, "clawnch launch attempt");
            client.attempt_launch(api_key, post_id)
        })
        .await
    }

    async fn attempt_launch(
        &self,
        api_key: &str,
        post_id: &str,
    ) -> Result<ClawnchLaunch, LaunchError> {
        let url = format!("{}/launch", self.base_url.trim_end_matches('/'));
        let resp = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(LAUNCH_TIMEOUT_SECS))
            .json(&serde_json::json!({
                "moltbook_key": api_key,
                "post_id": post_id,
            }))
            .send()
            .await
            .map_err(|e| LaunchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("launch failed with status {status}"));
            return Err(LaunchError::Upstream {
                status: Some(status.as_u16()),
                message,
            });
        }

        resp.json().await.map_err(|e| LaunchError::Upstream {
            status: None,
            message: format!("clawnch response parse failed: {e}"),
        })
    }
}

/// Linear backoff: 2 s after the first failed attempt, 4 s after the second.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(2000 * u64::from(attempt))
}

async fn launch_with_retry<F, Fut>(mut attempt_fn: F) -> Result<ClawnchLaunch, LaunchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ClawnchLaunch, LaunchError>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match attempt_fn(attempt).await {
            Ok(launch) => return Ok(launch),
            Err(e) => {
                if attempt < MAX_LAUNCH_ATTEMPTS && e.is_retryable() {
                    tracing::warn!(attempt, error = %e, "launch attempt failed, retrying");
                    tokio::time::sleep(backoff_delay(attempt)).await;
                    continue;
                }
                return Err(e);
            }
        }
    }
}
