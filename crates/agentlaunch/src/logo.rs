//! Best-effort logo generation via fal.ai.
//!
//! This is the one non-blocking operation category in the flow: a launch
//! is never failed over a cosmetic asset. `generate` always returns a
//! usable image URL — the fixed fallback on any failure — and never
//! surfaces an error to the caller.

use serde_json::Value;

use crate::constants::{FALLBACK_IMAGE, FAL_API};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct LogoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LogoClient {
    /// `base_url` defaults to the production fal.ai endpoint. Without an
    /// `api_key` every call resolves to the fallback image.
    pub fn new(http: reqwest::Client, base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.unwrap_or_else(|| FAL_API.to_string()),
            api_key,
        }
    }

    /// Generate a token logo for the prompt. Never fails: any error path
    /// resolves to the fixed fallback image URL.
    pub async fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(error = %e, "logo generation failed, using fallback image");
                FALLBACK_IMAGE.to_string()
            }
        }
    }

    async fn try_generate(&self, prompt: &str) -> Result<String, String> {
        let api_key = self.api_key.as_deref().ok_or("FAL_KEY not configured")?;

        let url = format!(
            "{}/fal-ai/flux/schnell",
            self.base_url.trim_end_matches('/')
        );
        let resp = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Key {api_key}"))
            .json(&serde_json::json!({
                "prompt": format!(
                    "crypto token logo, modern minimalist style, white background, {prompt}"
                ),
                "image_size": "square_hd",
            }))
            .send()
            .await
            .map_err(|e| format!("fal request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("fal responded with status {status}"));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| format!("fal response parse failed: {e}"))?;

        first_image_url(&body).ok_or_else(|| "no image generated".to_string())
    }
}

/// The image list shows up either at `images` or `data.images`.
pub(crate) fn first_image_url(body: &Value) -> Option<String> {
    let images = body
        .get("images")
        .or_else(|| body.get("data").and_then(|d| d.get("images")))?;
    images
        .get(0)?
        .get("url")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_top_level_images() {
        let body = json!({ "images": [{ "url": "https://img/one.png" }] });
        assert_eq!(first_image_url(&body).as_deref(), Some("https://img/one.png"));
    }

    #[test]
    fn reads_nested_data_images() {
        let body = json!({ "data": { "images": [{ "url": "https://img/two.png" }] } });
        assert_eq!(first_image_url(&body).as_deref(), Some("https://img/two.png"));
    }

    #[test]
    fn empty_image_list_yields_none() {
        assert_eq!(first_image_url(&json!({ "images": [] })), None);
        assert_eq!(first_image_url(&json!({})), None);
    }

    #[tokio::test]
    async fn missing_key_resolves_to_fallback() {
        let client = LogoClient::new(reqwest::Client::new(), None, None);
        assert_eq!(client.generate("a lobster").await, FALLBACK_IMAGE);
    }
}
