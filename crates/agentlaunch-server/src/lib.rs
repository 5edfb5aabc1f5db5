//! agentlaunch server — the HTTP surface consumed by the wizard UI.
//!
//! Four JSON endpoints drive the wizard (create-agent, generate-logo,
//! launch-token, randomize); orchestration and upstream clients live in
//! the core [`agentlaunch`] crate. This crate provides configuration,
//! state, error-to-status mapping, and metrics.
//!
//! # Modules
//!
//! - [`routes`] — HTTP endpoints (wizard API, health, metrics)
//! - [`config`] — env-driven [`ServerConfig`](config::ServerConfig)
//! - [`error`] — [`ApiError`](error::ApiError) with typed error-kind slugs
//! - [`state`] — shared [`AppState`](state::AppState)
//! - [`randomize`] — agent name/persona generation with offline fallbacks
//! - [`metrics`] — Prometheus metrics for the launch flow

pub mod config;
pub mod cors;
pub mod error;
pub mod metrics;
pub mod randomize;
pub mod routes;
pub mod security;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;
