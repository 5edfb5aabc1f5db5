//! The launch orchestration sequence: validate, normalize, post, launch.
//!
//! Composes "create post" and "launch token" over trait seams so the
//! sequence can be exercised without the network. Failure policy:
//! validation is local fast-fail, a 429 on post creation short-circuits
//! before the launch step, and a final 503 from the launch step surfaces
//! the already-created post id so the caller can resume later without
//! recreating the post. No automatic compensation is performed; an
//! orphaned post stays up.

use std::future::Future;

use serde_json::Value;

use crate::clawnch::ClawnchClient;
use crate::constants::FALLBACK_IMAGE;
use crate::error::LaunchError;
use crate::moltbook::{extract_post_id, post_accepted, MoltbookClient};
use crate::post_format::{build_post_content, build_post_title};
use crate::token::{ClawnchLaunch, LaunchResult, TokenLaunchRequest};

/// Social-platform side of the sequence: carries the launch post.
pub trait SocialPlatform: Send + Sync {
    fn create_post(
        &self,
        api_key: &str,
        title: &str,
        content: &str,
    ) -> impl Future<Output = Result<Value, LaunchError>> + Send;
}

/// Deployment side of the sequence: turns a post into a token.
pub trait LaunchService: Send + Sync {
    fn launch(
        &self,
        api_key: &str,
        post_id: &str,
    ) -> impl Future<Output = Result<ClawnchLaunch, LaunchError>> + Send;
}

impl SocialPlatform for MoltbookClient {
    fn create_post(
        &self,
        api_key: &str,
        title: &str,
        content: &str,
    ) -> impl Future<Output = Result<Value, LaunchError>> + Send {
        MoltbookClient::create_post(self, api_key, title, content)
    }
}

impl LaunchService for ClawnchClient {
    fn launch(
        &self,
        api_key: &str,
        post_id: &str,
    ) -> impl Future<Output = Result<ClawnchLaunch, LaunchError>> + Send {
        ClawnchClient::launch(self, api_key, post_id)
    }
}

/// Run the full launch sequence for one request.
///
/// Steps 1–3 (validate, normalize, render the post body) are local: no
/// network call is made when they fail. A post may exist without a
/// successful launch — [`LaunchError::Unavailable`] and
/// [`LaunchError::Rejected`] carry the post id for manual resumption.
pub async fn launch_token<S, L>(
    social: &S,
    launcher: &L,
    request: &TokenLaunchRequest,
) -> Result<LaunchResult, LaunchError>
where
    S: SocialPlatform,
    L: LaunchService,
{
    request.validate()?;
    let manifest = request.normalize(FALLBACK_IMAGE);
    let title = build_post_title(&request.name);
    let content = build_post_content(&request.name, &manifest)?;

    let envelope = social
        .create_post(&request.api_key, &title, &content)
        .await?;

    if !post_accepted(&envelope) {
        return Err(LaunchError::Rejected {
            message: envelope
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Failed to create post")
                .to_string(),
            post_id: None,
        });
    }

    let post_id = extract_post_id(&envelope).ok_or(LaunchError::MissingPostId)?;
    tracing::info!(post_id = %post_id, token = %manifest.symbol, "launch post created");

    let launch = match launcher.launch(&request.api_key, &post_id).await {
        Ok(launch) => launch,
        Err(LaunchError::Upstream {
            status: Some(503), ..
        }) => {
            return Err(LaunchError::Unavailable { post_id });
        }
        Err(e) => return Err(e),
    };

    if launch.success {
        tracing::info!(
            post_id = %post_id,
            clanker_url = launch.clanker_url.as_deref().unwrap_or(""),
            "token launched"
        );
        Ok(LaunchResult {
            clanker_url: launch.clanker_url.unwrap_or_default(),
            token_address: launch.token_address,
            post_id,
        })
    } else {
        Err(LaunchError::Rejected {
            message: launch
                .error
                .unwrap_or_else(|| "Clawnch launch failed".to_string()),
            post_id: Some(post_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post_format::CLAWNCH_MARKER;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    type SocialResponder = Box<dyn Fn() -> Result<Value, LaunchError> + Send + Sync>;
    type LaunchResponder = Box<dyn Fn() -> Result<ClawnchLaunch, LaunchError> + Send + Sync>;

    struct MockSocial {
        calls: AtomicUsize,
        last_content: Mutex<Option<String>>,
        respond: SocialResponder,
    }

    impl MockSocial {
        fn new(respond: SocialResponder) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_content: Mutex::new(None),
                respond,
            }
        }

        fn accepting(post_id: &str) -> Self {
            let envelope = json!({ "success": true, "post": { "id": post_id } });
            Self::new(Box::new(move || Ok(envelope.clone())))
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SocialPlatform for MockSocial {
        fn create_post(
            &self,
            _api_key: &str,
            _title: &str,
            content: &str,
        ) -> impl Future<Output = Result<Value, LaunchError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_content.lock().unwrap() = Some(content.to_string());
            let result = (self.respond)();
            async move { result }
        }
    }

    struct MockLauncher {
        calls: AtomicUsize,
        last_post_id: Mutex<Option<String>>,
        respond: LaunchResponder,
    }

    impl MockLauncher {
        fn new(respond: LaunchResponder) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_post_id: Mutex::new(None),
                respond,
            }
        }

        fn succeeding() -> Self {
            Self::new(Box::new(|| {
                Ok(ClawnchLaunch {
                    success: true,
                    clanker_url: Some("https://clanker.world/clanker/0x7355".into()),
                    token_address: Some("0x7355".into()),
                    error: None,
                })
            }))
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl LaunchService for MockLauncher {
        fn launch(
            &self,
            _api_key: &str,
            post_id: &str,
        ) -> impl Future<Output = Result<ClawnchLaunch, LaunchError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_post_id.lock().unwrap() = Some(post_id.to_string());
            let result = (self.respond)();
            async move { result }
        }
    }

    fn request() -> TokenLaunchRequest {
        TokenLaunchRequest {
            api_key: "moltbook_sk_test".into(),
            name: "MyToken".into(),
            symbol: "mtk".into(),
            description: None,
            image_url: None,
            wallet: "0xABC".into(),
        }
    }

    #[tokio::test]
    async fn oversized_input_makes_no_network_call() {
        let social = MockSocial::accepting("p1");
        let launcher = MockLauncher::succeeding();

        let mut req = request();
        req.name = "n".repeat(51);
        let err = launch_token(&social, &launcher, &req).await.unwrap_err();

        assert!(matches!(err, LaunchError::Validation(_)));
        assert_eq!(social.call_count(), 0);
        assert_eq!(launcher.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_wallet_makes_no_network_call() {
        let social = MockSocial::accepting("p1");
        let launcher = MockLauncher::succeeding();

        let mut req = request();
        req.wallet.clear();
        let err = launch_token(&social, &launcher, &req).await.unwrap_err();

        assert!(matches!(err, LaunchError::Validation(_)));
        assert_eq!(social.call_count(), 0);
        assert_eq!(launcher.call_count(), 0);
    }

    #[tokio::test]
    async fn post_content_carries_marker_and_normalized_symbol() {
        let social = MockSocial::accepting("p1");
        let launcher = MockLauncher::succeeding();

        launch_token(&social, &launcher, &request()).await.unwrap();

        let content = social.last_content.lock().unwrap().clone().unwrap();
        assert!(content.contains(CLAWNCH_MARKER));
        assert!(content.contains("\"symbol\": \"MTK\""));
        assert!(content.contains("MyToken - Launched via Agent Tokenizer"));
    }

    #[tokio::test]
    async fn rate_limit_short_circuits_before_launch() {
        let social = MockSocial::new(Box::new(|| Err(LaunchError::RateLimited)));
        let launcher = MockLauncher::succeeding();

        let err = launch_token(&social, &launcher, &request())
            .await
            .unwrap_err();

        assert!(matches!(err, LaunchError::RateLimited));
        assert_eq!(launcher.call_count(), 0);
    }

    #[tokio::test]
    async fn id_in_data_shape_reaches_the_launch_call() {
        let social = MockSocial::new(Box::new(|| {
            Ok(json!({ "success": true, "data": { "id": "data-shaped-id" } }))
        }));
        let launcher = MockLauncher::succeeding();

        let result = launch_token(&social, &launcher, &request()).await.unwrap();

        assert_eq!(result.post_id, "data-shaped-id");
        assert_eq!(
            launcher.last_post_id.lock().unwrap().as_deref(),
            Some("data-shaped-id")
        );
    }

    #[tokio::test]
    async fn accepted_envelope_without_id_is_an_error() {
        let social = MockSocial::new(Box::new(|| Ok(json!({ "success": true }))));
        let launcher = MockLauncher::succeeding();

        let err = launch_token(&social, &launcher, &request())
            .await
            .unwrap_err();

        assert!(matches!(err, LaunchError::MissingPostId));
        assert_eq!(launcher.call_count(), 0);
    }

    #[tokio::test]
    async fn rejected_envelope_surfaces_upstream_error() {
        let social = MockSocial::new(Box::new(|| {
            Ok(json!({ "success": false, "error": "submolt is read-only" }))
        }));
        let launcher = MockLauncher::succeeding();

        let err = launch_token(&social, &launcher, &request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LaunchError::Rejected { message, post_id: None } if message == "submolt is read-only"
        ));
    }

    #[tokio::test]
    async fn unavailable_launch_carries_post_id() {
        let social = MockSocial::accepting("recoverable-post");
        let launcher = MockLauncher::new(Box::new(|| {
            Err(LaunchError::Upstream {
                status: Some(503),
                message: "service unavailable".into(),
            })
        }));

        let err = launch_token(&social, &launcher, &request())
            .await
            .unwrap_err();

        match &err {
            LaunchError::Unavailable { post_id } => {
                assert_eq!(post_id, "recoverable-post");
                assert!(err.to_string().contains("recoverable-post"));
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn launch_rejection_carries_post_id() {
        let social = MockSocial::accepting("p9");
        let launcher = MockLauncher::new(Box::new(|| {
            Ok(ClawnchLaunch {
                success: false,
                error: Some("agent must be claimed by a human".into()),
                ..Default::default()
            })
        }));

        let err = launch_token(&social, &launcher, &request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LaunchError::Rejected { message, post_id: Some(id) }
                if message.contains("claimed") && id == "p9"
        ));
    }
}
