use crate::codec::scanner::{Malformed, Scanner, Token};
use crate::log_debug;

/// Percent-decode `text` into its raw bytes.
///
/// Well-formed `%HH` tokens contribute one byte each. Every other character,
/// including a `%` that does not start a well-formed token, contributes its
/// own UTF-8 bytes. Never fails.
pub fn decode_to_bytes(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];

    for token in Scanner::new(text, Malformed::Rescan) {
        match token {
            Token::Octet { byte, .. } => bytes.push(byte),
            Token::Literal(c) => bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes()),
            // Rescan mode reports failed tokens as literals.
            Token::Malformed(span) => {
                for c in span {
                    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
    }

    bytes
}

/// Percent-decode `text` (RFC 3986 §2.1).
///
/// Malformed sequences such as `"100% done"` or a trailing `"%4"` pass
/// through as literal text.
///
/// The decoded bytes are reinterpreted as UTF-8 once, after the whole input
/// has been scanned. Bytes that do not form valid UTF-8 are replaced the way
/// [`String::from_utf8_lossy`] does it: each maximal invalid subsequence
/// becomes a single U+FFFD. Use [`decode_to_bytes`] to get the bytes instead.
pub fn decode(text: &str) -> String {
    if !text.contains('%') {
        return text.to_string();
    }

    match String::from_utf8(decode_to_bytes(text)) {
        Ok(decoded) => decoded,
        Err(err) => {
            log_debug!(
                "decode",
                "decoded bytes of {:?} are not valid UTF-8 ({}), substituting U+FFFD",
                text,
                err.utf8_error()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
