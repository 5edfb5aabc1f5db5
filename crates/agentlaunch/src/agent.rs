use serde::{Deserialize, Serialize};

/// A registered agent identity on Moltbook.
///
/// Created once by the registration endpoint. The `api_key` is an opaque
/// bearer credential and must be treated as a secret; `claim_url` is a
/// one-time verification link tying the agent to a human-controlled
/// social account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub api_key: String,
    pub claim_url: String,
}

/// Envelope returned by Moltbook's `/agents/register` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RegisterEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub agent: Option<Agent>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_envelope_round_trip() {
        let envelope: RegisterEnvelope = serde_json::from_value(serde_json::json!({
            "success": true,
            "agent": {
                "id": "a-1",
                "name": "Bot",
                "api_key": "moltbook_sk_abc",
                "claim_url": "https://www.moltbook.com/claim/xyz",
            },
        }))
        .unwrap();

        assert!(envelope.success);
        let agent = envelope.agent.unwrap();
        assert!(!agent.id.is_empty());
        assert_eq!(agent.name, "Bot");
        assert!(!agent.api_key.is_empty());
        assert!(!agent.claim_url.is_empty());
    }

    #[test]
    fn register_error_envelope() {
        let envelope: RegisterEnvelope = serde_json::from_value(serde_json::json!({
            "success": false,
            "error": "name already taken",
        }))
        .unwrap();

        assert!(!envelope.success);
        assert!(envelope.agent.is_none());
        assert_eq!(envelope.error.as_deref(), Some("name already taken"));
    }
}
