use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agentlaunch_server::cors::build_cors;
use agentlaunch_server::routes;
use agentlaunch_server::state::AppState;
use agentlaunch_server::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let rate_limit_rpm = config.rate_limit_rpm;
    let allowed_origins = config.allowed_origins.clone();
    let spa_dir = config.spa_dir.clone();

    tracing::info!("agentlaunch server listening on port {port}");
    tracing::info!("Moltbook API: {}", config.services.moltbook_url);
    tracing::info!("Clawnch API:  {}", config.services.clawnch_url);
    tracing::info!("Rate limit: {rate_limit_rpm} req/min per IP");
    tracing::info!("  POST http://localhost:{port}/api/create-agent");
    tracing::info!("  POST http://localhost:{port}/api/generate-logo");
    tracing::info!("  POST http://localhost:{port}/api/launch-token");
    tracing::info!("  POST http://localhost:{port}/api/randomize");
    if let Some(ref dir) = spa_dir {
        tracing::info!("Serving SPA from: {dir}");
    }

    let state = web::Data::new(AppState::new(config));

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_minute(rate_limit_rpm)
        .finish()
        .expect("failed to build rate limiter config");

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(build_cors(&allowed_origins))
            .wrap(Governor::new(&governor_conf))
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(65_536))
            .service(routes::create_agent)
            .service(routes::generate_logo)
            .service(routes::launch_token)
            .service(routes::randomize)
            .service(routes::health)
            .service(routes::metrics_endpoint);

        if let Some(ref dir) = spa_dir {
            let index_path = format!("{dir}/index.html");
            app = app.service(
                actix_files::Files::new("/", dir)
                    .index_file("index.html")
                    .default_handler(web::to(move || {
                        let path = index_path.clone();
                        async move { actix_files::NamedFile::open_async(path).await }
                    })),
            );
        }

        app
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
