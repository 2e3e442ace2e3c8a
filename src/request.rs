use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap};
use thiserror::Error;
use tracing::instrument;

/// Errors from the shared HTTP helpers.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid header value: {0}")]
    Header(#[from] header::InvalidHeaderValue),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("no length information in response from {0}")]
    MissingLength(String),
}

/// Fetches `url` as text, sending `referer` plus the caller's extra headers.
///
/// # Errors
/// Errors on transport failures and on non-success status codes.
#[instrument(skip(client, headers))]
pub async fn get(
    client: &reqwest::Client,
    url: &str,
    referer: &str,
    headers: HeaderMap,
) -> Result<String, RequestError> {
    let resp = client
        .get(url)
        .header(header::REFERER, referer)
        .headers(headers)
        .send()
        .await?
        .error_for_status()?;

    Ok(resp.text().await?)
}

/// Learns the byte length of a remote file from a one-byte ranged request.
///
/// Servers that honor the range answer `206` with the total in
/// `Content-Range`; servers that ignore it answer the whole file and the
/// plain `Content-Length` is the total.
///
/// # Errors
/// Errors on transport failures, non-success status codes, and responses
/// carrying no usable length.
#[instrument(skip(client))]
pub async fn size(
    client: &reqwest::Client,
    url: &str,
    referer: &str,
) -> Result<u64, RequestError> {
    let resp = client
        .get(url)
        .header(header::REFERER, referer)
        .header(header::RANGE, "bytes=0-0")
        .send()
        .await?
        .error_for_status()?;

    if resp.status() == StatusCode::PARTIAL_CONTENT {
        return content_range_total(resp.headers())
            .ok_or_else(|| RequestError::MissingLength(url.to_owned()));
    }
    resp.content_length()
        .ok_or_else(|| RequestError::MissingLength(url.to_owned()))
}

/// Total size out of a `Content-Range: bytes 0-0/N` header, if known.
fn content_range_total(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_RANGE)?
        .to_str()
        .ok()?
        .rsplit('/')
        .next()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn headers_with_range(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_RANGE, value.parse().unwrap());
        headers
    }

    #[test]
    fn content_range_total_parses_known_total() {
        assert_eq!(
            content_range_total(&headers_with_range("bytes 0-0/52428800")),
            Some(52_428_800)
        );
    }

    #[test]
    fn content_range_total_rejects_unknown_total() {
        assert_eq!(content_range_total(&headers_with_range("bytes 0-0/*")), None);
        assert_eq!(content_range_total(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn size_reads_content_range_of_partial_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media.mp4"))
            .and(header("Range", "bytes=0-0"))
            .and(header("Referer", "https://example.com"))
            .respond_with(
                ResponseTemplate::new(206)
                    .insert_header("Content-Range", "bytes 0-0/7341")
                    .set_body_bytes(b"x".to_vec()),
            )
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/media.mp4", server.uri());
        let size = size(&client, &url, "https://example.com").await.unwrap();
        assert_eq!(size, 7341);
    }

    #[tokio::test]
    async fn size_falls_back_to_content_length_when_range_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 512]))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/media.mp4", server.uri());
        let size = size(&client, &url, "https://example.com").await.unwrap();
        assert_eq!(size, 512);
    }

    #[tokio::test]
    async fn size_errors_on_missing_file() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let url = format!("{}/gone.mp4", server.uri());
        let err = size(&client, &url, "https://example.com").await.unwrap_err();
        assert!(matches!(err, RequestError::Http(_)));
    }
}
