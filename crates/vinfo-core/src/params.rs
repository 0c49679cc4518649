//! Flat `key=value&key=value` parameter decoding.
//!
//! The video-info wire format nests this encoding twice: the response body
//! is one flat parameter string, and the `adaptive_fmts` value decodes to a
//! comma-separated list of further flat parameter strings. Both levels go
//! through [`decode_params`].

use std::borrow::Cow;
use std::collections::HashMap;

/// Decodes a flat parameter string into a keyed mapping.
///
/// Pairs are separated by `&`; a pair must contain exactly one `=` to be
/// kept (so `a=` is kept with an empty value, while `bogus` and `a=b=c`
/// are skipped without error). A repeated key silently keeps the last
/// value seen.
pub fn decode_params(raw: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for pair in raw.split('&') {
        let fields: Vec<&str> = pair.split('=').collect();
        if fields.len() != 2 {
            continue;
        }
        map.insert(fields[0].to_string(), fields[1].to_string());
    }
    map
}

/// Percent-decodes `%XX` escapes in `text`.
///
/// Returns `None` when the decoded bytes are not valid UTF-8. Text without
/// `%` escapes passes through unchanged; `+` is not treated as a space.
pub fn percent_decode(text: &str) -> Option<String> {
    urlencoding::decode(text).ok().map(Cow::into_owned)
}
