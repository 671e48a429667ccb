pub mod charset;
pub mod decode;
pub mod encode;
pub mod hex;
pub mod normalize;
pub mod scanner;

pub use charset::{is_reserved, is_unreserved, CharSet};
pub use decode::{decode, decode_to_bytes};
pub use encode::{encode, encode_bytes, encode_unreserved};
pub use hex::{byte_to_hex, hex_pair_to_byte, hex_to_byte};
pub use normalize::{equivalent, is_normalized, normalize};
pub use scanner::{Malformed, Scanner, Token};
