use std::collections::HashMap;

use serde::Serialize;

/// Caller-supplied knobs for an extraction.
#[derive(Debug, Default, Clone)]
pub struct Options {
    /// Cookie header sent with the watch-page fetch. An empty string selects
    /// the built-in anonymous session cookie.
    pub cookie: String,
}

/// What kind of media a result record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
}

impl MediaType {
    /// Lowercase label used in listings, matching the JSON form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
        }
    }
}

/// One physical file of a stream.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub url: String,
    pub size: u64,
    pub ext: String,
}

/// A single downloadable rendition of the media.
///
/// When `need_mux` is set the parts are separate video and audio files that
/// have to be combined into one container by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Stream {
    pub id: String,
    pub quality: String,
    pub parts: Vec<Part>,
    /// Sum of all part sizes, in bytes.
    pub size: u64,
    /// Suggested container extension. `None` leaves the choice to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    pub need_mux: bool,
}

/// Everything extracted from one watch page.
#[derive(Debug, Clone, Serialize)]
pub struct MediaData {
    pub site: &'static str,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Keyed by quality label. A later stream with the same label replaces
    /// the earlier one.
    pub streams: HashMap<String, Stream>,
    pub url: String,
}
