use thiserror::Error;

use crate::request::RequestError;

/// Failure modes of a single extraction run. Every kind is terminal: no
/// partial stream set is ever returned.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("fetching watch page: {0}")]
    Fetch(#[source] RequestError),

    /// The markup carries no `window._SSR_HYDRATED_DATA` assignment, or an
    /// empty one. Usually an anti-bot shell page served to a stale cookie.
    #[error("no hydrated state found in page markup")]
    StateNotFound,

    /// Carries the serde error of the second (single-work) decode attempt.
    #[error("hydrated state matches neither page shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("probing stream size: {0}")]
    Probe(#[source] RequestError),
}
