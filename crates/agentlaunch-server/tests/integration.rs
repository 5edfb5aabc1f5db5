use actix_web::{test, web, App};

use agentlaunch_server::config::ServerConfig;
use agentlaunch_server::routes;
use agentlaunch_server::state::AppState;

/// Build an AppState pointing at unreachable upstreams. Every test here
/// exercises paths that must fail (or succeed) before any network call.
fn make_state(metrics_token: Option<&str>) -> web::Data<AppState> {
    let config = ServerConfig {
        port: 0,
        services: agentlaunch::ServiceConfig {
            moltbook_url: "http://localhost:1".to_string(),
            clawnch_url: "http://localhost:1".to_string(),
            fal_url: "http://localhost:1".to_string(),
            submolt: "clawnch".to_string(),
        },
        fal_key: None,
        allowed_origins: vec![],
        rate_limit_rpm: 60,
        spa_dir: None,
        metrics_token: metrics_token.map(str::to_string),
    };
    web::Data::new(AppState::new(config))
}

#[actix_rt::test]
async fn health_reports_ok() {
    let app = test::init_service(App::new().service(routes::health)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "agentlaunch-server");
}

#[actix_rt::test]
async fn create_agent_requires_name_and_description() {
    let state = make_state(None);
    let app = test::init_service(App::new().app_data(state).service(routes::create_agent)).await;

    let req = test::TestRequest::post()
        .uri("/api/create-agent")
        .set_json(serde_json::json!({ "name": "Bot" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "validation");
    assert_eq!(body["message"], "Name and description required");
}

#[actix_rt::test]
async fn launch_token_requires_core_fields() {
    let state = make_state(None);
    let app = test::init_service(App::new().app_data(state).service(routes::launch_token)).await;

    let req = test::TestRequest::post()
        .uri("/api/launch-token")
        .set_json(serde_json::json!({ "name": "MyToken", "symbol": "MTK" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("api_key, name, symbol, and wallet are required"));
}

#[actix_rt::test]
async fn launch_token_rejects_oversized_name() {
    let state = make_state(None);
    let app = test::init_service(App::new().app_data(state).service(routes::launch_token)).await;

    let req = test::TestRequest::post()
        .uri("/api/launch-token")
        .set_json(serde_json::json!({
            "api_key": "moltbook_sk_test",
            "name": "n".repeat(51),
            "symbol": "MTK",
            "wallet": "0xABC",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("name too long"));
}

#[actix_rt::test]
async fn launch_token_rejects_oversized_symbol() {
    let state = make_state(None);
    let app = test::init_service(App::new().app_data(state).service(routes::launch_token)).await;

    let req = test::TestRequest::post()
        .uri("/api/launch-token")
        .set_json(serde_json::json!({
            "api_key": "moltbook_sk_test",
            "name": "MyToken",
            "symbol": "TOOLONGSYMB",
            "wallet": "0xABC",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("Symbol too long"));
}

#[actix_rt::test]
async fn generate_logo_requires_prompt() {
    let state = make_state(None);
    let app = test::init_service(App::new().app_data(state).service(routes::generate_logo)).await;

    let req = test::TestRequest::post()
        .uri("/api/generate-logo")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation");
}

#[actix_rt::test]
async fn randomize_falls_back_without_fal_key() {
    let state = make_state(None);
    let app = test::init_service(App::new().app_data(state).service(routes::randomize)).await;

    for kind in ["name", "soul"] {
        let req = test::TestRequest::post()
            .uri("/api/randomize")
            .set_json(serde_json::json!({ "type": kind }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(!body["result"].as_str().unwrap().is_empty());
    }
}

#[actix_rt::test]
async fn metrics_requires_bearer_token() {
    let state = make_state(Some("metrics-token-123"));
    let app =
        test::init_service(App::new().app_data(state).service(routes::metrics_endpoint)).await;

    // No bearer token -> 401
    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Wrong bearer token -> 401
    let req = test::TestRequest::get()
        .uri("/metrics")
        .insert_header(("Authorization", "Bearer wrong"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Correct token -> 200
    let req = test::TestRequest::get()
        .uri("/metrics")
        .insert_header(("Authorization", "Bearer metrics-token-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_rt::test]
async fn metrics_forbidden_when_no_token_configured() {
    let state = make_state(None);
    let app =
        test::init_service(App::new().app_data(state).service(routes::metrics_endpoint)).await;

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}
