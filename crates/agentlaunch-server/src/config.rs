use std::env;

use url::Url;

use agentlaunch::ServiceConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_RATE_LIMIT_RPM: u64 = 60;

#[derive(Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,
    /// Upstream service endpoints (Moltbook, Clawnch, fal.ai)
    pub services: ServiceConfig,
    /// fal.ai credential (None = logo/randomize fall back offline)
    pub fal_key: Option<String>,
    /// CORS allowed origins
    pub allowed_origins: Vec<String>,
    /// Rate limit requests per minute
    pub rate_limit_rpm: u64,
    /// Directory to serve SPA static files from (None = don't serve SPA)
    pub spa_dir: Option<String>,
    /// Bearer token required for /metrics (None = protected by default)
    pub metrics_token: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("services", &self.services)
            .field("fal_key", &self.fal_key.as_ref().map(|_| "[REDACTED]"))
            .field("allowed_origins", &self.allowed_origins)
            .field("rate_limit_rpm", &self.rate_limit_rpm)
            .field("spa_dir", &self.spa_dir)
            .field(
                "metrics_token",
                &self.metrics_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let mut services = ServiceConfig::default();
        if let Ok(value) = env::var("MOLTBOOK_URL") {
            validate_url("MOLTBOOK_URL", &value)?;
            services.moltbook_url = value;
        }
        if let Ok(value) = env::var("CLAWNCH_URL") {
            validate_url("CLAWNCH_URL", &value)?;
            services.clawnch_url = value;
        }
        if let Ok(value) = env::var("FAL_URL") {
            validate_url("FAL_URL", &value)?;
            services.fal_url = value;
        }
        if let Ok(value) = env::var("SUBMOLT") {
            if !value.is_empty() {
                services.submolt = value;
            }
        }

        let fal_key = env::var("FAL_KEY").ok().filter(|s| !s.is_empty());
        if fal_key.is_none() {
            tracing::warn!(
                "FAL_KEY not set — logo generation and randomize will use offline fallbacks"
            );
        }

        let allowed_origins: Vec<String> = env::var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let rate_limit_rpm = env::var("RATE_LIMIT_RPM")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_RPM);

        let spa_dir = env::var("SPA_DIR").ok().filter(|s| !s.is_empty());

        let metrics_token = env::var("METRICS_TOKEN").ok().filter(|s| !s.is_empty());
        if metrics_token.is_none() {
            tracing::warn!(
                "METRICS_TOKEN not set — /metrics requires AGENTLAUNCH_PUBLIC_METRICS=true"
            );
        }

        Ok(Self {
            port,
            services,
            fal_key,
            allowed_origins,
            rate_limit_rpm,
            spa_dir,
            metrics_token,
        })
    }
}

fn validate_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map_err(|_| ConfigError::InvalidUrl(name, value.to_string()))?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL in {0}: {1}")]
    InvalidUrl(&'static str, String),
}
