//! Zone-suffix handling.
//!
//! The text after `%` is tried as a plain decimal scope id. Any
//! irregularity (empty, signs, non-digits, 32-bit overflow) silently maps
//! to scope 0; the zone suffix never fails the surrounding address parse.

/// Parses the zone suffix into a scope id, defaulting to 0.
pub(crate) fn parse(zone: &str) -> u32 {
    if zone.is_empty() || !zone.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    zone.parse().unwrap_or(0)
}
