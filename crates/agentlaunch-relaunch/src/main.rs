//! Manual launch trigger.
//!
//! When the launch step fails with a 503 after the post was created, the
//! wizard surfaces the post id. This tool retries the launch step alone
//! for that post — no new post is created.

use agentlaunch::{ClawnchClient, LaunchError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("MOLTBOOK_API_KEY")
        .expect("MOLTBOOK_API_KEY environment variable is required");
    let post_id = std::env::var("POST_ID").expect("POST_ID environment variable is required");
    let clawnch_url = std::env::var("CLAWNCH_URL").ok();

    println!("Triggering manual launch...");
    println!("  Post: {post_id}");

    let client = ClawnchClient::new(reqwest::Client::new(), clawnch_url);

    match client.launch(&api_key, &post_id).await {
        Ok(launch) if launch.success => {
            println!("Launch succeeded.");
            if let Some(url) = launch.clanker_url {
                println!("  Clanker: {url}");
            }
            if let Some(address) = launch.token_address {
                println!("  Token:   {address}");
            }
        }
        Ok(launch) => {
            eprintln!(
                "Launch rejected: {}",
                launch.error.unwrap_or_else(|| "unknown reason".to_string())
            );
            std::process::exit(1);
        }
        Err(LaunchError::Upstream {
            status: Some(status),
            message,
        }) => {
            eprintln!("Launch failed with status {status}: {message}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Launch failed: {e}");
            std::process::exit(1);
        }
    }
}
