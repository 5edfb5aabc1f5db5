use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::error::LaunchError;

/// Parameters for a token launch, as submitted by the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenLaunchRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub wallet: String,
}

/// The normalized token parameters embedded in the launch post.
///
/// Field order here IS the wire field order: the Clawnch bot parses the
/// fenced JSON block out of the post content, so `name, symbol, wallet,
/// description, image` must serialize in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenManifest {
    pub name: String,
    pub symbol: String,
    pub wallet: String,
    pub description: String,
    pub image: String,
}

/// Terminal artifact of a successful launch. Displayed once, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResult {
    pub clanker_url: String,
    #[serde(default)]
    pub token_address: Option<String>,
    pub post_id: String,
}

/// Response body from Clawnch's `/launch` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClawnchLaunch {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub clanker_url: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl TokenLaunchRequest {
    /// Reject missing or oversized inputs. Runs before any network call.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if is_blank(&self.api_key)
            || is_blank(&self.name)
            || is_blank(&self.symbol)
            || is_blank(&self.wallet)
        {
            return Err(LaunchError::Validation(
                "api_key, name, symbol, and wallet are required".to_string(),
            ));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(LaunchError::Validation(format!(
                "Token name too long (max {MAX_NAME_LEN} chars)"
            )));
        }
        if self.symbol.chars().count() > MAX_SYMBOL_LEN {
            return Err(LaunchError::Validation(format!(
                "Symbol too long (max {MAX_SYMBOL_LEN} chars)"
            )));
        }
        Ok(())
    }

    /// Normalize into the manifest embedded in the post: symbol uppercased
    /// and truncated, description defaulted and capped, image defaulted.
    pub fn normalize(&self, fallback_image: &str) -> TokenManifest {
        let description = match self.description.as_deref().filter(|d| !is_blank(d)) {
            Some(d) => d.to_string(),
            None => format!("{} - Launched via Agent Tokenizer", self.name),
        };

        TokenManifest {
            name: truncate_chars(&self.name, MAX_NAME_LEN),
            symbol: truncate_chars(&self.symbol.to_uppercase(), MAX_SYMBOL_LEN),
            wallet: self.wallet.clone(),
            description: truncate_chars(&description, MAX_DESCRIPTION_LEN),
            image: self
                .image_url
                .as_deref()
                .filter(|u| !is_blank(u))
                .unwrap_or(fallback_image)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FALLBACK_IMAGE;

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

    #[test]
    fn validate_requires_core_fields() {
        for field in ["api_key", "name", "symbol", "wallet"] {
            let mut req = request();
            match field {
                "api_key" => req.api_key.clear(),
                "name" => req.name.clear(),
                "symbol" => req.symbol.clear(),
                _ => req.wallet.clear(),
            }
            let err = req.validate().unwrap_err();
            assert!(matches!(err, LaunchError::Validation(_)), "{field}");
        }
    }

    #[test]
    fn validate_rejects_oversized_name_and_symbol() {
        let mut req = request();
        req.name = "x".repeat(51);
        assert!(matches!(
            req.validate(),
            Err(LaunchError::Validation(msg)) if msg.contains("name")
        ));

        let mut req = request();
        req.symbol = "TOOLONGSYMB".into();
        assert!(matches!(
            req.validate(),
            Err(LaunchError::Validation(msg)) if msg.contains("Symbol")
        ));
    }

    #[test]
    fn normalize_uppercases_symbol() {
        let lower = request().normalize(FALLBACK_IMAGE);
        let mut upper_req = request();
        upper_req.symbol = "MTK".into();
        let upper = upper_req.normalize(FALLBACK_IMAGE);

        assert_eq!(lower.symbol, "MTK");
        assert_eq!(lower, upper);
    }

    #[test]
    fn normalize_defaults_description_and_image() {
        let manifest = request().normalize(FALLBACK_IMAGE);
        assert_eq!(manifest.description, "MyToken - Launched via Agent Tokenizer");
        assert_eq!(manifest.image, FALLBACK_IMAGE);
    }

    #[test]
    fn normalize_caps_description_at_500_chars() {
        let mut req = request();
        req.description = Some("d".repeat(600));
        let manifest = req.normalize(FALLBACK_IMAGE);
        assert_eq!(manifest.description.chars().count(), 500);
    }

    #[test]
    fn normalize_keeps_supplied_image() {
        let mut req = request();
        req.image_url = Some("https://img.example/logo.png".into());
        let manifest = req.normalize(FALLBACK_IMAGE);
        assert_eq!(manifest.image, "https://img.example/logo.png");
    }
}
