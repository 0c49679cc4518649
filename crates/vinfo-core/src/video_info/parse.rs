//! Decode the raw video-info body into renditions.

use crate::params::{decode_params, percent_decode};

use super::error::VideoInfoError;
use super::rendition::Rendition;
use super::ADAPTIVE_FMTS_KEY;

/// Decodes the raw response body into an ordered list of renditions.
///
/// The body is a flat parameter string whose `adaptive_fmts` value holds a
/// percent-encoded, comma-separated list of further flat parameter strings,
/// one per rendition. Decoding is all-or-nothing: the first invalid record
/// fails the whole call and nothing is returned for the records before it.
pub fn parse_renditions(raw: &str) -> Result<Vec<Rendition>, VideoInfoError> {
    let top = decode_params(raw);
    let encoded = top
        .get(ADAPTIVE_FMTS_KEY)
        .ok_or_else(|| VideoInfoError::MissingField {
            key: ADAPTIVE_FMTS_KEY,
            raw: raw.to_string(),
        })?;

    let payload = percent_decode(encoded)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| VideoInfoError::DecodeFailed {
            key: ADAPTIVE_FMTS_KEY,
            encoded: encoded.clone(),
        })?;

    // Trailing empty records are ignored, so a payload of bare separators
    // has no records at all.
    let mut records: Vec<&str> = payload.split(',').collect();
    while records.last().is_some_and(|r| r.is_empty()) {
        records.pop();
    }
    if records.is_empty() {
        return Err(VideoInfoError::NoRenditions { payload });
    }

    let mut renditions = Vec::with_capacity(records.len());
    for record in records {
        let fields = decode_params(record);
        let rendition =
            Rendition::from_params(&fields).map_err(|_| VideoInfoError::InvalidRecord {
                record: record.to_string(),
            })?;
        renditions.push(rendition);
    }

    Ok(renditions)
}
