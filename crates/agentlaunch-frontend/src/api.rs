//! Typed fetch wrappers over the server's wizard API.
//!
//! Every call resolves to a `Result`, or an `Option` for the best-effort
//! operations. Failures degrade to the inline error banner, never an
//! unhandled crash.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub api_key: String,
    pub claim_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchOutcome {
    pub clanker_url: String,
    #[serde(default)]
    pub token_address: Option<String>,
    pub post_id: String,
}

/// A failed API call: the machine-readable error slug (when the server
/// sent one) and the human message.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    pub kind: Option<String>,
    pub message: String,
}

impl ApiFailure {
    fn network() -> Self {
        Self {
            kind: None,
            message: "Network error. Please try again.".to_string(),
        }
    }

    fn from_envelope(body: &Value, fallback: &str) -> Self {
        Self {
            kind: body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string),
            message: body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string(),
        }
    }
}

async fn post_json(path: &str, body: &Value) -> Result<Value, ApiFailure> {
    let resp = Request::post(path)
        .json(body)
        .map_err(|_| ApiFailure::network())?
        .send()
        .await
        .map_err(|_| ApiFailure::network())?;

    resp.json::<Value>().await.map_err(|_| ApiFailure::network())
}

fn succeeded(body: &Value) -> bool {
    body.get("success").and_then(Value::as_bool).unwrap_or(false)
}

pub async fn create_agent(name: &str, description: &str) -> Result<Agent, ApiFailure> {
    let body = post_json(
        "/api/create-agent",
        &serde_json::json!({ "name": name, "description": description }),
    )
    .await?;

    if succeeded(&body) {
        serde_json::from_value(body["agent"].clone()).map_err(|_| ApiFailure::network())
    } else {
        Err(ApiFailure::from_envelope(&body, "Failed to create agent"))
    }
}

/// Best-effort: a failed or unsuccessful logo response is tolerated and
/// simply omits the image.
pub async fn generate_logo(prompt: &str) -> Option<String> {
    let body = post_json("/api/generate-logo", &serde_json::json!({ "prompt": prompt }))
        .await
        .ok()?;
    if !succeeded(&body) {
        return None;
    }
    body.get("image_url")
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub struct LaunchRequest {
    pub api_key: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image_url: Option<String>,
    pub wallet: String,
}

pub async fn launch_token(request: &LaunchRequest) -> Result<LaunchOutcome, ApiFailure> {
    let body = post_json(
        "/api/launch-token",
        &serde_json::json!({
            "api_key": request.api_key,
            "name": request.name,
            "symbol": request.symbol.to_uppercase(),
            "description": request.description,
            "image_url": request.image_url,
            "wallet": request.wallet,
        }),
    )
    .await?;

    if succeeded(&body) {
        serde_json::from_value(body.clone()).map_err(|_| ApiFailure::network())
    } else {
        Err(ApiFailure::from_envelope(&body, "Token launch failed"))
    }
}

/// Best-effort, like logo generation.
pub async fn randomize(kind: &str) -> Option<String> {
    let body = post_json("/api/randomize", &serde_json::json!({ "type": kind }))
        .await
        .ok()?;
    if !succeeded(&body) {
        return None;
    }
    body.get("result")
        .and_then(Value::as_str)
        .map(str::to_string)
}
