//! Boolean validation wrappers.
//!
//! These run the same pipeline as [`IpAddress::parse`] and discard the
//! result, so they can never diverge from it on any input.

use crate::IpAddress;

/// Whether `text` parses as an address literal.
pub fn is_valid(text: &str) -> bool {
    IpAddress::parse(text).is_ok()
}

/// Whether the UTF-8 bytes parse as an address literal.
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    IpAddress::parse_utf8(bytes).is_ok()
}
