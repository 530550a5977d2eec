//! Reversible encoding of identifiers into route-safe tokens.
//!
//! A token travels inside a single path segment, so it must survive both
//! arbitrary identifier content (unicode source names) and the reserved
//! characters base64 itself emits (`+`, `/`, `=`). Encoding is therefore
//! two-stage: base64 over the identifier bytes, then percent-encoding over
//! the base64 text. Every producer and consumer of tokens goes through
//! this one module.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::{Error, Result};

/// Encodes an identifier into a path-safe token.
pub fn encode(id: &str) -> String {
    urlencoding::encode(&STANDARD.encode(id)).into_owned()
}

/// Decodes a token back into the identifier it was minted from.
///
/// Fails with [`Error::Decode`] on any malformed input; callers treat that
/// as "article not found" rather than a crash.
pub fn decode(token: &str) -> Result<String> {
    let unescaped = urlencoding::decode(token)
        .map_err(|e| Error::Decode(format!("invalid percent-encoding: {}", e)))?;
    let bytes = STANDARD
        .decode(unescaped.as_bytes())
        .map_err(|e| Error::Decode(format!("invalid base64: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Decode(format!("invalid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::generate_id;

    #[test]
    fn round_trips_generated_identifiers() {
        let ids = [
            generate_id(Some("CNN"), Some("2024-01-01T10:00:00Z"), 0),
            generate_id(Some("Frankfurter Allgemeine Zeitung"), Some("2024-02-29T23:59:59Z"), 1),
            generate_id(Some("Página/12"), Some("2024-05-01T12:00:00-03:00"), 2),
            generate_id(None, None, 3),
            generate_id(Some("ABC-News"), None, 4),
        ];
        for id in ids {
            assert_eq!(decode(&encode(&id)).unwrap(), id);
        }
    }

    #[test]
    fn round_trips_arbitrary_strings() {
        for s in ["", "a", "hello world", "日本経済新聞-2024", "a/b+c=d"] {
            assert_eq!(decode(&encode(s)).unwrap(), s);
        }
    }

    #[test]
    fn tokens_contain_no_path_delimiters() {
        let token = encode("a/b?c#d");
        assert!(!token.contains('/'));
        assert!(!token.contains('?'));
        assert!(!token.contains('#'));
        assert!(!token.contains('+'));
        assert!(!token.contains('='));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["%%%", "not base64!!", "%ZZ"] {
            match decode(bad) {
                Err(Error::Decode(_)) => {}
                other => panic!("expected decode error, got {:?}", other),
            }
        }
    }
}
