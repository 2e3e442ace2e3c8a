use std::sync::LazyLock;

use base64::{Engine as _, prelude::BASE64_STANDARD};
use regex::Regex;
use tracing::warn;

use crate::xigua::error::ExtractError;

static HYDRATED_STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"window\._SSR_HYDRATED_DATA=(.*?)</script>").unwrap());

/// Cuts the hydrated state assignment out of the page markup.
///
/// The blob sits on one line inside a `<script>` tag, so the match runs up to
/// the first closing tag after the assignment.
///
/// # Errors
/// Errors when the assignment is missing or empty, which is what the site
/// serves to clients it has flagged as bots.
pub fn locate_hydrated_state(html: &str) -> Result<&str, ExtractError> {
    let state = HYDRATED_STATE_RE
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map_or("", |matched| matched.as_str());

    if state.is_empty() {
        return Err(ExtractError::StateNotFound);
    }

    Ok(state)
}

/// Quotes the bare `undefined` literals the server leaves in the blob, which
/// would otherwise make it invalid JSON.
pub fn sanitize_state_json(raw: &str) -> String {
    raw.replace(":undefined", ":\"undefined\"")
}

/// Decodes a base64-obfuscated rendition URL.
///
/// Undecodable values come back as an empty string, which callers treat the
/// same as a quality slot the work was never transcoded to.
pub fn decode_stream_url(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let bytes = match BASE64_STANDARD.decode(raw) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("discarding rendition with undecodable URL ({err})");
            return String::new();
        }
    };

    match String::from_utf8(bytes) {
        Ok(url) => url,
        Err(err) => {
            warn!("discarding rendition with non-UTF-8 URL ({err})");
            String::new()
        }
    }
}
