//! Single-byte hex conversion used by every `%HH` token.

use crate::error::{Error, Result};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Renders `byte` as exactly two hex digits.
pub fn byte_to_hex(byte: u8, uppercase: bool) -> String {
    if uppercase {
        hex::encode_upper([byte])
    } else {
        hex::encode([byte])
    }
}

/// Parses a two-character hex pair such as `"2f"` or `"A9"`.
///
/// Mixed case is accepted. Anything other than exactly two hex digits fails
/// with [`Error::InvalidHex`].
pub fn hex_to_byte(pair: &str) -> Result<u8> {
    // Byte length 2 still admits a single two-byte char, which
    // `decode_to_slice` rejects as a non-hex character.
    if pair.len() != 2 {
        return Err(Error::InvalidHex(pair.to_string()));
    }

    let mut out = [0u8; 1];
    hex::decode_to_slice(pair, &mut out).map_err(|_| Error::InvalidHex(pair.to_string()))?;
    Ok(out[0])
}

/// Same as [`hex_to_byte`], for callers that already hold the two characters.
pub fn hex_pair_to_byte(hi: char, lo: char) -> Result<u8> {
    if !hi.is_ascii() || !lo.is_ascii() {
        return Err(Error::InvalidHex(format!("{}{}", hi, lo)));
    }

    let mut out = [0u8; 1];
    hex::decode_to_slice([hi as u8, lo as u8], &mut out)
        .map_err(|_| Error::InvalidHex(format!("{}{}", hi, lo)))?;
    Ok(out[0])
}

/// Appends `%HH` with uppercase digits.
pub fn push_pct_octet(out: &mut String, byte: u8) {
    out.push('%');
    out.push(HEX_UPPER[(byte >> 4) as usize] as char);
    out.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
}
