//! RFC 3986 percent-encoding: encode, decode and normalize `%HH` text.

pub mod codec;
pub mod error;
pub mod path;
pub mod utils;

pub use codec::{
    byte_to_hex, decode, decode_to_bytes, encode, encode_bytes, encode_unreserved, equivalent,
    hex_to_byte, is_normalized, is_unreserved, normalize, CharSet,
};
pub use error::{Error, Result};
pub use path::remove_dot_segments;
