use std::sync::Arc;

use agentlaunch::{ClawnchClient, LogoClient, MoltbookClient};

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub moltbook: MoltbookClient,
    pub clawnch: ClawnchClient,
    pub logo: LogoClient,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        let moltbook = MoltbookClient::new(
            http_client.clone(),
            Some(config.services.moltbook_url.clone()),
        )
        .with_submolt(config.services.submolt.clone());
        let clawnch = ClawnchClient::new(
            http_client.clone(),
            Some(config.services.clawnch_url.clone()),
        );
        let logo = LogoClient::new(
            http_client.clone(),
            Some(config.services.fal_url.clone()),
            config.fal_key.clone(),
        );

        Self {
            config: Arc::new(config),
            moltbook,
            clawnch,
            logo,
            http_client,
        }
    }
}
