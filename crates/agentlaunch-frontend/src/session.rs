//! Session persistence for the wizard.
//!
//! The agent credential survives a page reload so verification can happen
//! out-of-band without losing the session. Persistence is an explicit
//! repository with a load/save/clear lifecycle over localStorage: three
//! string values under fixed keys plus a schema version. The original
//! agent id is not persisted. Subsequent calls only need the credential,
//! so a restored agent carries a sentinel id.

use crate::api::Agent;

const KEY_API_KEY: &str = "agentlaunch_api_key";
const KEY_NAME: &str = "agentlaunch_name";
const KEY_CLAIM: &str = "agentlaunch_claim";
const KEY_SCHEMA: &str = "agentlaunch_schema";
const SCHEMA_VERSION: &str = "1";

/// Sentinel id for agents reconstructed from storage.
pub const RESTORED_AGENT_ID: &str = "restored";

pub struct SessionStore {
    storage: web_sys::Storage,
}

impl SessionStore {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }

    /// Reconstruct the persisted agent. All three values must be present;
    /// a schema mismatch clears the stale session instead of restoring it.
    pub fn load(&self) -> Option<Agent> {
        if let Ok(Some(version)) = self.storage.get_item(KEY_SCHEMA) {
            if version != SCHEMA_VERSION {
                self.clear();
                return None;
            }
        }

        let api_key = self.storage.get_item(KEY_API_KEY).ok()??;
        let name = self.storage.get_item(KEY_NAME).ok()??;
        let claim_url = self.storage.get_item(KEY_CLAIM).ok()??;

        Some(Agent {
            id: RESTORED_AGENT_ID.to_string(),
            name,
            api_key,
            claim_url,
        })
    }

    pub fn save(&self, agent: &Agent) {
        let _ = self.storage.set_item(KEY_SCHEMA, SCHEMA_VERSION);
        let _ = self.storage.set_item(KEY_API_KEY, &agent.api_key);
        let _ = self.storage.set_item(KEY_NAME, &agent.name);
        let _ = self.storage.set_item(KEY_CLAIM, &agent.claim_url);
    }

    pub fn clear(&self) {
        let _ = self.storage.remove_item(KEY_SCHEMA);
        let _ = self.storage.remove_item(KEY_API_KEY);
        let _ = self.storage.remove_item(KEY_NAME);
        let _ = self.storage.remove_item(KEY_CLAIM);
    }
}
