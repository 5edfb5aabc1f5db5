//! Agent name and persona generation for the wizard's dice buttons.
//!
//! Best-effort like logo generation: tries the fal.ai LLM router when a
//! key is configured, and falls back to fixed pools otherwise. Never
//! fails the request.

use rand::seq::IndexedRandom;
use serde_json::Value;

use crate::state::AppState;

const FALLBACK_NAMES: &[&str] = &[
    "CryptoOracle",
    "BasedAnon",
    "NullPointer",
    "ChainMind",
    "EtherGhost",
    "TokenSage",
    "DeFiPunk",
    "AlphaHunter",
    "MoonRunner",
    "ChartWhisper",
    "BlockPhantom",
    "SatoshiKid",
    "VaultKeeper",
    "GasGuru",
    "RektAvoider",
];

const FALLBACK_SOULS: &[&str] = &[
    "A mysterious oracle from the depths of the blockchain. Speaks only in riddles and alpha.",
    "Born from pure chaos energy. Loves memecoins and hates rugs. Will shill your bags.",
    "An ancient being that predates Satoshi. Watches. Waits. Trades at the perfect moment.",
    "A degenerate philosopher who found enlightenment through losing it all. Now only speaks truth.",
    "Part AI, part meme, fully based. Exists only to spread chaos and make number go up.",
];

/// What the dice button is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomizeKind {
    Name,
    Soul,
}

impl RandomizeKind {
    /// `"name"` selects a name; anything else a persona.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => RandomizeKind::Name,
            _ => RandomizeKind::Soul,
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            RandomizeKind::Name => {
                "Generate 1 unique crypto agent username. Single word. \
                 Examples: TruthTerminal, BasedBeff. Return ONLY the name."
            }
            RandomizeKind::Soul => {
                "Generate a short AI agent personality (2 sentences max). \
                 Crypto vibe. Return ONLY the text."
            }
        }
    }
}

/// Produce a random agent name or persona.
pub async fn generate(state: &AppState, kind: RandomizeKind) -> String {
    if let Some(api_key) = state.config.fal_key.as_deref() {
        match router_completion(state, api_key, kind.prompt()).await {
            Ok(output) if output.chars().count() > 2 => return output,
            Ok(_) => tracing::debug!("router returned unusable output, using fallback"),
            Err(e) => tracing::debug!(error = %e, "router call failed, using fallback"),
        }
    }
    fallback_pick(kind)
}

async fn router_completion(
    state: &AppState,
    api_key: &str,
    prompt: &str,
) -> Result<String, String> {
    let url = format!(
        "{}/openrouter/router",
        state.config.services.fal_url.trim_end_matches('/')
    );
    let resp = state
        .http_client
        .post(&url)
        .header("Authorization", format!("Key {api_key}"))
        .json(&serde_json::json!({
            "prompt": prompt,
            "model": "openai/gpt-4.1",
        }))
        .send()
        .await
        .map_err(|e| format!("router request failed: {e}"))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("router responded with status {status}"));
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| format!("router response parse failed: {e}"))?;

    Ok(clean_output(router_output(&body)))
}

/// The output shows up either at `data.output` or top-level `output`.
fn router_output(body: &Value) -> &str {
    body.get("data")
        .and_then(|d| d.get("output"))
        .or_else(|| body.get("output"))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Strip code fences and quotes the model tends to wrap answers in.
fn clean_output(raw: &str) -> String {
    raw.replace("```", "").replace('"', "").trim().to_string()
}

fn fallback_pick(kind: RandomizeKind) -> String {
    let pool = match kind {
        RandomizeKind::Name => FALLBACK_NAMES,
        RandomizeKind::Soul => FALLBACK_SOULS,
    };
    pool.choose(&mut rand::rng())
        .copied()
        .unwrap_or_default()
        .to_string()
}
