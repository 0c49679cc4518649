//! Error type for fetching and decoding a video-info payload.
//!
//! Every failure is fatal to the current fetch-and-decode invocation and
//! carries enough of the offending text to diagnose without re-running.
//! The one deliberate exception lives in [`crate::params::decode_params`]:
//! malformed individual `key=value` pairs are skipped silently.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoInfoError {
    /// Video id was empty or all whitespace; checked before any network
    /// activity.
    #[error("video id missing")]
    EmptyVideoId,

    /// The constructed request URL did not parse.
    #[error("bad url: {url}")]
    BadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The transfer itself failed (connect, TLS, read).
    #[error("failed to download video info")]
    Transport(#[from] curl::Error),

    /// Server answered with a non-2xx final status.
    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    /// Response body was not valid UTF-8.
    #[error("video info body is not valid UTF-8")]
    BodyEncoding(#[from] std::string::FromUtf8Error),

    /// The target key was absent from the top-level parameter mapping.
    #[error("failed to find '{key}': {raw}")]
    MissingField { key: &'static str, raw: String },

    /// Percent-decoding the target value failed or yielded nothing.
    #[error("failed to decode '{key}': {encoded}")]
    DecodeFailed { key: &'static str, encoded: String },

    /// The decoded payload split into zero records.
    #[error("no renditions in '{payload}'")]
    NoRenditions { payload: String },

    /// One record failed the rendition validity invariant; the whole
    /// decode fails with it, no partial results.
    #[error("failed to decode rendition from param string: '{record}'")]
    InvalidRecord { record: String },
}
