use crate::codec::charset::CharSet;
use crate::codec::hex::push_pct_octet;

/// Percent-encode `text` (RFC 3986 §2.1).
///
/// Characters in `allowed` are copied as-is. Every other character is
/// written as one `%HH` token per UTF-8 byte, with uppercase hex digits, so
/// `é` becomes `%C3%A9`.
///
/// Putting `%` itself into `allowed` makes the output ambiguous to
/// [`decode`](crate::decode).
pub fn encode(text: &str, allowed: &CharSet) -> String {
    // Worst case every byte becomes "%XX".
    let mut out = String::with_capacity(text.len() * 3);
    let mut buf = [0u8; 4];

    for c in text.chars() {
        if allowed.contains(c) {
            out.push(c);
            continue;
        }
        for &b in c.encode_utf8(&mut buf).as_bytes() {
            push_pct_octet(&mut out, b);
        }
    }

    out
}

/// [`encode`] with the RFC 3986 unreserved set.
pub fn encode_unreserved(text: &str) -> String {
    encode(text, &CharSet::unreserved())
}

/// Percent-encode arbitrary bytes into a URL-safe string.
///
/// Useful for binary fields such as a 20-byte `info_hash` in a tracker URL.
/// A byte is left as-is only when it is ASCII and its character is in
/// `allowed`; bytes `>= 0x80` are always encoded.
pub fn encode_bytes(bytes: &[u8], allowed: &CharSet) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);

    for &b in bytes {
        if b.is_ascii() && allowed.contains(b as char) {
            out.push(b as char);
            continue;
        }
        push_pct_octet(&mut out, b);
    }

    out
}
