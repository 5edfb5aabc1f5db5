//! The launch post wire format.
//!
//! The Clawnch bot does not take launch parameters over an API call: it
//! scans the `clawnch` submolt for posts carrying a marker line followed by
//! a fenced JSON block, and parses the token parameters out of the post
//! content. The template produced here is therefore a compatibility
//! contract — marker token, fence syntax, field order and naming must be
//! reproduced byte for byte.

use crate::error::LaunchError;
use crate::token::TokenManifest;

/// Marker line the Clawnch bot looks for, on its own line.
pub const CLAWNCH_MARKER: &str = "!clawnch";

/// Render the post title for a launch.
pub fn build_post_title(name: &str) -> String {
    format!("\u{1F680} {name}")
}

/// Render the post content: a human line, a blank line, the marker on its
/// own line, then the manifest in a ```json fence (2-space indent).
pub fn build_post_content(name: &str, manifest: &TokenManifest) -> Result<String, LaunchError> {
    let token_data = serde_json::to_string_pretty(manifest)?;
    Ok(format!(
        "Launching {name}! \u{1F680}\n\n{CLAWNCH_MARKER}\n```json\n{token_data}\n```"
    ))
}

/// Parse a manifest back out of post content the way the Clawnch bot does:
/// locate the marker line, then the ```json fence that follows it.
///
/// Used by tests to verify the round-trip; exported because it documents
/// the downstream parsing convention.
pub fn extract_manifest(content: &str) -> Option<TokenManifest> {
    let after_marker = content
        .lines()
        .skip_while(|line| line.trim() != CLAWNCH_MARKER)
        .skip(1)
        .collect::<Vec<_>>()
        .join("\n");

    let fence_start = after_marker.find("```json")?;
    let body = &after_marker[fence_start + "```json".len()..];
    let fence_end = body.find("```")?;
    serde_json::from_str(body[..fence_end].trim()).ok()
}
