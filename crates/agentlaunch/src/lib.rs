//! Token launches for Moltbook agents via Clawnch.
//!
//! Orchestrates the three-step launch flow: register an agent identity on
//! Moltbook, generate a logo, then publish a launch post and trigger the
//! Clawnch deployment workflow that parses it.
//!
//! # Three-service model
//!
//! - **Moltbook** ([`MoltbookClient`]) — agent registration and post creation
//! - **Clawnch** ([`ClawnchClient`]) — token deployment, retried on transient failures
//! - **Logo generation** ([`LogoClient`]) — best-effort; never fails the flow
//!
//! # Quick example
//!
//! ```no_run
//! use agentlaunch::{launch_token, ClawnchClient, MoltbookClient, TokenLaunchRequest};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let http = reqwest::Client::new();
//! let moltbook = MoltbookClient::new(http.clone(), None);
//! let clawnch = ClawnchClient::new(http, None);
//!
//! let request = TokenLaunchRequest {
//!     api_key: "moltbook_sk_...".into(),
//!     name: "MyToken".into(),
//!     symbol: "mtk".into(),
//!     description: None,
//!     image_url: None,
//!     wallet: "0xABC".into(),
//! };
//!
//! let result = launch_token(&moltbook, &clawnch, &request).await.unwrap();
//! println!("launched: {}", result.clanker_url);
//! # }
//! ```

pub mod agent;
pub mod clawnch;
pub mod constants;
pub mod error;
pub mod launcher;
pub mod logo;
pub mod moltbook;
pub mod post_format;
pub mod token;

pub use agent::Agent;
pub use clawnch::ClawnchClient;
pub use constants::ServiceConfig;
pub use error::LaunchError;
pub use launcher::{launch_token, LaunchService, SocialPlatform};
pub use logo::LogoClient;
pub use moltbook::{extract_post_id, MoltbookClient};
pub use post_format::{build_post_content, build_post_title, CLAWNCH_MARKER};
pub use token::{ClawnchLaunch, LaunchResult, TokenLaunchRequest, TokenManifest};
