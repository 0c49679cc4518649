//! Rendition record decoded from one nested parameter string.

use std::collections::HashMap;
use thiserror::Error;

use crate::params::percent_decode;

/// One validated stream variant.
///
/// `media_type` and `url` are guaranteed present and non-blank; every other
/// field is passed through from the wire unparsed (numeric values and byte
/// ranges stay text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendition {
    /// MIME type plus codec string, e.g. `video/mp4; codecs="avc1.4d401e"`.
    pub media_type: String,
    /// Bitrate in bits per second, e.g. `990134`.
    pub bitrate: Option<String>,
    /// Frame rate, e.g. `30`.
    pub fps: Option<String>,
    /// Last-modified timestamp, e.g. `1417810479193972`.
    pub last_modified: Option<String>,
    pub projection_type: Option<String>,
    /// Content length in bytes, e.g. `92032447`.
    pub content_length: Option<String>,
    /// Initialization byte range, e.g. `0-707`.
    pub init_range: Option<String>,
    /// Numeric format tag distinguishing stream encodings, e.g. `135`.
    pub itag: Option<String>,
    /// Index byte range, e.g. `708-3031`.
    pub index_range: Option<String>,
    /// Extended tags; often present but empty.
    pub xtags: Option<String>,
    /// Human-readable quality label, e.g. `480p`.
    pub quality_label: Option<String>,
    /// Pixel dimensions, e.g. `640x480`.
    pub dimensions: Option<String>,
    /// Playback URL.
    pub url: String,
}

/// Record fields failed validation (media type or playback URL absent or
/// blank after percent-decoding).
#[derive(Debug, Error)]
#[error("rendition record is missing its media type or playback url")]
pub struct InvalidRendition;

/// A field counts as present only when it is non-blank after trimming.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Rendition {
    /// Builds a rendition from one decoded parameter mapping.
    ///
    /// `type` and `url` are percent-decoded here; all other fields are
    /// taken as-is. This is the only constructor, so a `Rendition` in hand
    /// always satisfies the validity invariant.
    pub(crate) fn from_params(
        fields: &HashMap<String, String>,
    ) -> Result<Rendition, InvalidRendition> {
        let media_type = non_blank(fields.get("type").and_then(|v| percent_decode(v)));
        let url = non_blank(fields.get("url").and_then(|v| percent_decode(v)));

        match (media_type, url) {
            (Some(media_type), Some(url)) => Ok(Rendition {
                media_type,
                bitrate: fields.get("bitrate").cloned(),
                fps: fields.get("fps").cloned(),
                last_modified: fields.get("lmt").cloned(),
                projection_type: fields.get("projection_type").cloned(),
                content_length: fields.get("clen").cloned(),
                init_range: fields.get("init").cloned(),
                itag: fields.get("itag").cloned(),
                index_range: fields.get("index").cloned(),
                xtags: fields.get("xtags").cloned(),
                quality_label: fields.get("quality_label").cloned(),
                dimensions: fields.get("size").cloned(),
                url,
            }),
            _ => Err(InvalidRendition),
        }
    }
}
