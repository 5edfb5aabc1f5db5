use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use agentlaunch::LaunchError;

/// API-surface errors, mapped to HTTP statuses and machine-readable
/// error-kind slugs. The wizard reads the slug first and only falls back
/// to message heuristics when the slug is absent.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or oversized input (no upstream call was made)
    Validation(String),
    /// Moltbook 429 on post creation
    RateLimited,
    /// Clawnch 503 after the post was created
    LaunchUnavailable { post_id: String },
    /// Upstream rejection that matches the unverified-agent heuristic
    AgentUnverified(String),
    /// Upstream rejection (launch or post explicitly refused)
    Rejected {
        message: String,
        post_id: Option<String>,
    },
    /// Upstream failure without rejection semantics
    Upstream(String),
    /// Unexpected internal error
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::RateLimited => {
                write!(f, "Rate limited: You can only post once every 30 minutes")
            }
            ApiError::LaunchUnavailable { post_id } => write!(
                f,
                "Clawnch server is temporarily unavailable. Post created - retry launch later with post_id: {}",
                post_id
            ),
            ApiError::AgentUnverified(msg) => write!(f, "{}", msg),
            ApiError::Rejected { message, .. } => write!(f, "{}", message),
            ApiError::Upstream(msg) => write!(f, "{}", msg),
            ApiError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// The upstream services report an unverified agent only as prose; this
/// substring check is the documented fallback until they expose a
/// structured error code.
pub fn is_unverified_hint(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("claimed") || lower.contains("human")
}

impl From<LaunchError> for ApiError {
    fn from(e: LaunchError) -> Self {
        match e {
            LaunchError::Validation(msg) => ApiError::Validation(msg),
            LaunchError::RateLimited => ApiError::RateLimited,
            LaunchError::Unavailable { post_id } => ApiError::LaunchUnavailable { post_id },
            LaunchError::MissingPostId => ApiError::Rejected {
                message: "Post created but no ID returned".to_string(),
                post_id: None,
            },
            LaunchError::Rejected { message, post_id } => {
                if is_unverified_hint(&message) {
                    ApiError::AgentUnverified(message)
                } else {
                    ApiError::Rejected { message, post_id }
                }
            }
            LaunchError::Upstream { message, .. } => ApiError::Upstream(message),
            LaunchError::Network(msg) => ApiError::Upstream(msg),
            LaunchError::Serde(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "validation",
                "message": msg,
            })),
            ApiError::RateLimited => HttpResponse::TooManyRequests().json(serde_json::json!({
                "success": false,
                "error": "rate_limited",
                "message": self.to_string(),
            })),
            ApiError::LaunchUnavailable { post_id } => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "success": false,
                    "error": "launch_unavailable",
                    "message": self.to_string(),
                    "post_id": post_id,
                }))
            }
            ApiError::AgentUnverified(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "agent_unverified",
                "message": msg,
            })),
            ApiError::Rejected { message, post_id } => {
                let mut body = serde_json::json!({
                    "success": false,
                    "error": "launch_failed",
                    "message": message,
                });
                if let Some(id) = post_id {
                    body["post_id"] = serde_json::json!(id);
                }
                HttpResponse::BadRequest().json(body)
            }
            ApiError::Upstream(msg) => {
                tracing::error!("upstream failure: {}", msg);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "success": false,
                    "error": "upstream_error",
                    "message": msg,
                }))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "success": false,
                    "error": "internal_error",
                    "message": "An internal error occurred",
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn unverified_hint_matches_known_phrasings() {
        assert!(is_unverified_hint("agent must be claimed by a human"));
        assert!(is_unverified_hint("Agent not CLAIMED yet"));
        assert!(is_unverified_hint("requires a human owner"));
        assert!(!is_unverified_hint("insufficient funds"));
    }

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation("x".into()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::RateLimited.error_response().status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::LaunchUnavailable {
                post_id: "p1".into()
            }
            .error_response()
            .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Upstream("boom".into()).error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn rejected_launch_maps_to_unverified_when_hinted() {
        let err: ApiError = LaunchError::Rejected {
            message: "agent must be claimed by a human first".into(),
            post_id: Some("p1".into()),
        }
        .into();
        assert!(matches!(err, ApiError::AgentUnverified(_)));
    }

    #[test]
    fn rejected_launch_stays_rejected_otherwise() {
        let err: ApiError = LaunchError::Rejected {
            message: "ticker already taken".into(),
            post_id: Some("p1".into()),
        }
        .into();
        assert!(matches!(
            err,
            ApiError::Rejected { post_id: Some(ref id), .. } if id == "p1"
        ));
    }

    #[test]
    fn unavailable_message_carries_post_id() {
        let err = ApiError::LaunchUnavailable {
            post_id: "e28ea723".into(),
        };
        assert!(err.to_string().contains("e28ea723"));
    }
}
