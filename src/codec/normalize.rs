use crate::codec::charset::is_unreserved;
use crate::codec::hex::push_pct_octet;
use crate::codec::scanner::{Malformed, Scanner, Token};

/// Percent-encoding normalization (RFC 3986 §6.2.2.2).
///
/// - `%HH` for an unreserved character is replaced by that character.
/// - Every other `%HH` is kept, with its hex digits uppercased.
/// - `%` followed by two non-hex characters is copied as that three-character
///   span; a truncated `%` or `%X` at the end is copied as-is.
///
/// An unreserved hex digit stays encoded when decoding it would complete a
/// `%` or `%X` left over from a malformed span (`%G%41B` must not become
/// `%G%AB`, which [`decode`](crate::decode) reads as byte `0xAB`).
///
/// The result is a fixed point (`normalize(normalize(s)) == normalize(s)`) and
/// decodes to the same bytes as `text`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for token in Scanner::new(text, Malformed::Span) {
        match token {
            Token::Literal(c) => out.push(c),
            Token::Octet { byte, .. }
                if byte.is_ascii()
                    && is_unreserved(byte as char)
                    && !completes_dangling_percent(&out, byte as char) =>
            {
                out.push(byte as char)
            }
            Token::Octet { byte, .. } => push_pct_octet(&mut out, byte),
            Token::Malformed(span) => out.extend(span),
        }
    }

    out
}

/// Whether appending `c` would turn the tail of `out` into a `%HH` token.
fn completes_dangling_percent(out: &str, c: char) -> bool {
    if !c.is_ascii_hexdigit() {
        return false;
    }

    let mut tail = out.chars().rev();
    match (tail.next(), tail.next()) {
        (Some('%'), _) => true,
        (Some(prev), Some('%')) => prev.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Whether `text` is already in normal form.
pub fn is_normalized(text: &str) -> bool {
    normalize(text) == text
}

/// Whether two encoded strings are equal after normalization.
pub fn equivalent(a: &str, b: &str) -> bool {
    a == b || normalize(a) == normalize(b)
}
