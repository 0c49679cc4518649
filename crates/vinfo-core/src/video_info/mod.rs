//! Video-info fetching and rendition decoding.
//!
//! One [`VideoInfoRequest`] performs one blocking GET against
//! `<endpoint>?video_id=<id>` and decodes the `adaptive_fmts` payload into
//! an ordered list of [`Rendition`]s. No retries, no caching; every call
//! re-issues the request.

mod error;
mod parse;
mod rendition;

pub use error::VideoInfoError;
pub use parse::parse_renditions;
pub use rendition::{InvalidRendition, Rendition};

use crate::config::DEFAULT_ENDPOINT;

/// Key in the response body whose value holds the encoded rendition list.
pub const ADAPTIVE_FMTS_KEY: &str = "adaptive_fmts";

/// A single video-info request, validated at construction.
#[derive(Debug, Clone)]
pub struct VideoInfoRequest {
    video_id: String,
    endpoint: String,
}

impl VideoInfoRequest {
    /// Builds a request against the default endpoint.
    ///
    /// Fails with [`VideoInfoError::EmptyVideoId`] when the id is empty or
    /// all whitespace; nothing touches the network before this check.
    pub fn new(video_id: &str) -> Result<Self, VideoInfoError> {
        Self::with_endpoint(video_id, DEFAULT_ENDPOINT)
    }

    /// Builds a request against a custom endpoint (config override, tests).
    pub fn with_endpoint(video_id: &str, endpoint: &str) -> Result<Self, VideoInfoError> {
        if video_id.trim().is_empty() {
            return Err(VideoInfoError::EmptyVideoId);
        }
        Ok(Self {
            video_id: video_id.to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// Request URL: the fixed template with the id substituted verbatim.
    pub fn request_url(&self) -> String {
        format!("{}?video_id={}", self.endpoint, self.video_id)
    }

    /// Performs the GET and returns the full response body as text.
    ///
    /// Blocks the calling thread until the body is fully read or the
    /// connection fails; there is deliberately no timeout. Redirects are
    /// followed; a non-2xx final status is an error.
    pub fn fetch(&self) -> Result<String, VideoInfoError> {
        let href = self.request_url();
        if let Err(e) = url::Url::parse(&href) {
            return Err(VideoInfoError::BadUrl {
                url: href,
                source: e,
            });
        }

        tracing::debug!("GET {}", href);

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(&href)?;
        easy.follow_location(true)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code < 200 || code >= 300 {
            return Err(VideoInfoError::HttpStatus { url: href, code });
        }

        let text = String::from_utf8(body)?;
        tracing::debug!("fetched {} bytes from {}", text.len(), href);
        Ok(text)
    }

    /// Fetch and decode in one call.
    pub fn fetch_renditions(&self) -> Result<Vec<Rendition>, VideoInfoError> {
        let raw = self.fetch()?;
        parse_renditions(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_video_id_rejected() {
        assert!(matches!(
            VideoInfoRequest::new(""),
            Err(VideoInfoError::EmptyVideoId)
        ));
    }

    #[test]
    fn whitespace_video_id_rejected() {
        assert!(matches!(
            VideoInfoRequest::new("  \t"),
            Err(VideoInfoError::EmptyVideoId)
        ));
        assert!(matches!(
            VideoInfoRequest::with_endpoint(" \n", "http://127.0.0.1:1/x"),
            Err(VideoInfoError::EmptyVideoId)
        ));
    }

    #[test]
    fn request_url_substitutes_id_verbatim() {
        let req = VideoInfoRequest::new("abc123").unwrap();
        assert_eq!(
            req.request_url(),
            "https://www.youtube.com/get_video_info?video_id=abc123"
        );
        // The id is inserted as given, no escaping.
        let req = VideoInfoRequest::new("a b").unwrap();
        assert!(req.request_url().ends_with("?video_id=a b"));
    }

    #[test]
    fn custom_endpoint_used() {
        let req = VideoInfoRequest::with_endpoint("xyz", "http://127.0.0.1:9000/info").unwrap();
        assert_eq!(req.request_url(), "http://127.0.0.1:9000/info?video_id=xyz");
    }

    #[test]
    fn unparseable_url_reported_before_transfer() {
        let req = VideoInfoRequest::with_endpoint("abc", "not a scheme").unwrap();
        match req.fetch() {
            Err(VideoInfoError::BadUrl { url, .. }) => {
                assert!(url.starts_with("not a scheme"));
            }
            other => panic!("expected BadUrl, got {other:?}"),
        }
    }
}
