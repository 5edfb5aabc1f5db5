use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use agentlaunch::constants::FALLBACK_IMAGE;
use agentlaunch::{LaunchError, TokenLaunchRequest};

use crate::error::ApiError;
use crate::metrics;
use crate::randomize::RandomizeKind;
use crate::security::constant_time_eq;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateAgentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[post("/api/create-agent")]
pub async fn create_agent(
    state: web::Data<AppState>,
    body: web::Json<CreateAgentRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.name.trim().is_empty() || body.description.trim().is_empty() {
        return Err(ApiError::Validation(
            "Name and description required".to_string(),
        ));
    }

    match state
        .moltbook
        .register_agent(&body.name, &body.description)
        .await
    {
        Ok(agent) => {
            metrics::REGISTER_REQUESTS
                .with_label_values(&["success"])
                .inc();
            tracing::info!(agent = %agent.name, "agent registered");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "agent": agent,
            })))
        }
        Err(e) => {
            metrics::REGISTER_REQUESTS
                .with_label_values(&["error"])
                .inc();
            tracing::warn!(error = %e, "agent registration failed");
            Err(e.into())
        }
    }
}

#[derive(Deserialize)]
pub struct GenerateLogoRequest {
    #[serde(default)]
    pub prompt: String,
}

#[post("/api/generate-logo")]
pub async fn generate_logo(
    state: web::Data<AppState>,
    body: web::Json<GenerateLogoRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.prompt.trim().is_empty() {
        return Err(ApiError::Validation("Prompt required".to_string()));
    }

    let image_url = state.logo.generate(&body.prompt).await;
    let result = if image_url == FALLBACK_IMAGE {
        "fallback"
    } else {
        "generated"
    };
    metrics::LOGO_REQUESTS.with_label_values(&[result]).inc();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "image_url": image_url,
    })))
}

#[post("/api/launch-token")]
pub async fn launch_token(
    state: web::Data<AppState>,
    body: web::Json<TokenLaunchRequest>,
) -> Result<HttpResponse, ApiError> {
    let start = std::time::Instant::now();

    let outcome =
        agentlaunch::launcher::launch_token(&state.moltbook, &state.clawnch, &body).await;
    let elapsed = start.elapsed().as_secs_f64();

    match outcome {
        Ok(result) => {
            metrics::LAUNCH_REQUESTS
                .with_label_values(&["success"])
                .inc();
            metrics::LAUNCH_LATENCY
                .with_label_values(&["success"])
                .observe(elapsed);
            tracing::info!(
                post_id = %result.post_id,
                clanker_url = %result.clanker_url,
                "token launched"
            );
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "clanker_url": result.clanker_url,
                "token_address": result.token_address,
                "post_id": result.post_id,
            })))
        }
        Err(e) => {
            let result = match &e {
                LaunchError::Validation(_) => "invalid",
                LaunchError::RateLimited => "rate_limited",
                LaunchError::Unavailable { .. } => "unavailable",
                LaunchError::Rejected { .. } | LaunchError::MissingPostId => "rejected",
                _ => "error",
            };
            metrics::LAUNCH_REQUESTS.with_label_values(&[result]).inc();
            metrics::LAUNCH_LATENCY
                .with_label_values(&[result])
                .observe(elapsed);
            tracing::warn!(error = %e, result, "token launch failed");
            Err(e.into())
        }
    }
}

#[derive(Deserialize)]
pub struct RandomizeRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[post("/api/randomize")]
pub async fn randomize(
    state: web::Data<AppState>,
    body: web::Json<RandomizeRequest>,
) -> HttpResponse {
    let kind = RandomizeKind::parse(body.kind.as_deref());
    let result = crate::randomize::generate(&state, kind).await;
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "result": result,
    }))
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "agentlaunch-server",
    }))
}

#[get("/metrics")]
pub async fn metrics_endpoint(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    match &state.config.metrics_token {
        Some(token) => {
            let authorized = req
                .headers()
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(|t| constant_time_eq(t.as_bytes(), token.as_bytes()))
                .unwrap_or(false);

            if !authorized {
                return HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": "unauthorized",
                    "message": "Valid Bearer token required for /metrics"
                }));
            }
        }
        None => {
            // No token configured — metrics are protected by default.
            // Set AGENTLAUNCH_PUBLIC_METRICS=true to opt in to unauthenticated access.
            let public_metrics = std::env::var("AGENTLAUNCH_PUBLIC_METRICS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false);
            if !public_metrics {
                return HttpResponse::Forbidden().json(serde_json::json!({
                    "error": "forbidden",
                    "message": "Set METRICS_TOKEN or AGENTLAUNCH_PUBLIC_METRICS=true to access /metrics"
                }));
            }
        }
    }
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics::metrics_output())
}
