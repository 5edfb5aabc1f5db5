/// Moltbook REST API base URL.
pub const MOLTBOOK_API: &str = "https://www.moltbook.com/api/v1";

/// Clawnch launch API base URL.
pub const CLAWNCH_API: &str = "https://clawn.ch/api";

/// fal.ai model-serving base URL.
pub const FAL_API: &str = "https://fal.run";

/// Submolt that the Clawnch launch bot watches for launch posts.
pub const SUBMOLT: &str = "clawnch";

/// Fallback token image when generation fails or no image is supplied.
pub const FALLBACK_IMAGE: &str = "https://iili.io/fLUphxa.jpg";

/// Maximum token name length.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum token symbol length.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Maximum token description length.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Timeout for a single Clawnch launch attempt.
pub const LAUNCH_TIMEOUT_SECS: u64 = 60;

/// Total launch attempts (first try plus two retries).
pub const MAX_LAUNCH_ATTEMPTS: u32 = 3;

/// Runtime service endpoints. Decouples the clients from compile-time
/// constants so deployments can point at staging instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub moltbook_url: String,
    pub clawnch_url: String,
    pub fal_url: String,
    pub submolt: String,
}

impl Default for ServiceConfig {
    /// Defaults to the production Moltbook/Clawnch/fal endpoints.
    fn default() -> Self {
        Self {
            moltbook_url: MOLTBOOK_API.to_string(),
            clawnch_url: CLAWNCH_API.to_string(),
            fal_url: FAL_API.to_string(),
            submolt: SUBMOLT.to_string(),
        }
    }
}
