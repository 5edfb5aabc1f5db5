use thiserror::Error;

/// Errors returned by launch operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Input rejected before any network call was made.
    #[error("{0}")]
    Validation(String),

    /// Moltbook returned 429 on post creation. The caller must wait;
    /// the launch step is never attempted.
    #[error("Rate limited: You can only post once every 30 minutes")]
    RateLimited,

    /// Clawnch answered 503 after the post was already created. The post id
    /// is surfaced so the launch step can be retried later without
    /// recreating the post.
    #[error("Clawnch server is temporarily unavailable. Post created - retry launch later with post_id: {post_id}")]
    Unavailable { post_id: String },

    /// Post creation reported success but none of the known response shapes
    /// carried an id.
    #[error("Post created but no ID returned")]
    MissingPostId,

    /// An upstream service answered with an explicit rejection
    /// (`success: false` envelope or 4xx error body).
    #[error("{message}")]
    Rejected {
        message: String,
        /// Present when a post had already been created.
        post_id: Option<String>,
    },

    /// Non-2xx upstream response without rejection semantics we recognize.
    /// Status ≥ 500 is retry-class for the launch call.
    #[error("{message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// Request never produced a response (connect failure, timeout).
    /// Retry-class for the launch call.
    #[error("network error: {0}")]
    Network(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LaunchError {
    /// Whether the launch retry loop may try again after this failure:
    /// network-level failures and server errors (status ≥ 500) only.
    pub fn is_retryable(&self) -> bool {
        match self {
            LaunchError::Network(_) => true,
            LaunchError::Upstream {
                status: Some(status),
                ..
            } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_are_retryable() {
        assert!(LaunchError::Network("connection reset".into()).is_retryable());
    }

    #[test]
    fn server_errors_are_retryable() {
        let err = LaunchError::Upstream {
            status: Some(500),
            message: "internal".into(),
        };
        assert!(err.is_retryable());

        let err = LaunchError::Upstream {
            status: Some(503),
            message: "unavailable".into(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let err = LaunchError::Upstream {
            status: Some(400),
            message: "bad request".into(),
        };
        assert!(!err.is_retryable());

        let err = LaunchError::Upstream {
            status: Some(404),
            message: "not found".into(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn terminal_errors_are_not_retryable() {
        assert!(!LaunchError::RateLimited.is_retryable());
        assert!(!LaunchError::Validation("missing".into()).is_retryable());
        assert!(!LaunchError::MissingPostId.is_retryable());
        assert!(!LaunchError::Unavailable {
            post_id: "p1".into()
        }
        .is_retryable());
    }

    #[test]
    fn unavailable_message_includes_post_id() {
        let err = LaunchError::Unavailable {
            post_id: "e28ea723".into(),
        };
        assert!(err.to_string().contains("e28ea723"));
    }
}
