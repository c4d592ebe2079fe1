//! Cache Key Module
//!
//! Content-addressed key derivation for the result cache.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha1::{Digest, Sha1};

// == Cache Key ==
/// Derives the cache key for `(endpoint, text)`:
/// the endpoint name, a colon, and the URL-safe base64 of the text's SHA-1
/// digest.
///
/// Returns `None` when the text exceeds `max_text_chars` — for very large
/// texts we skip caching entirely to avoid the hashing overhead. That is a
/// bypass signal, not a miss.
pub fn cache_key(endpoint: &str, text: &str, max_text_chars: usize) -> Option<String> {
    if text.chars().count() > max_text_chars {
        return None;
    }

    let digest = Sha1::digest(text.as_bytes());
    Some(format!("{endpoint}:{}", URL_SAFE_NO_PAD.encode(digest)))
}
