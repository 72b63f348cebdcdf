//! Legacy BSD `inet_aton`-style IPv4 parsing.
//!
//! A dotted literal has 1-4 segments. Each segment detects its own base
//! from its prefix (`0x`/`0X` hex, leading `0` octal, otherwise decimal),
//! every leading segment must fit in a byte, and the final segment absorbs
//! whatever width the dot count leaves over: with N segments the last one
//! holds the low `(5-N)*8` bits.

use crate::error::MalformedAddress;

const MAX_VALUE: u64 = u32::MAX as u64;

/// Radix of one dotted segment, detected from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Base {
    Dec = 10,
    Oct = 8,
    Hex = 16,
}

impl Base {
    fn digit(self, b: u8) -> Option<u64> {
        let d = match (self, b) {
            (Base::Oct, b'0'..=b'7') => b - b'0',
            (Base::Dec | Base::Hex, b'0'..=b'9') => b - b'0',
            (Base::Hex, b'a'..=b'f') => b - b'a' + 10,
            (Base::Hex, b'A'..=b'F') => b - b'A' + 10,
            _ => return None,
        };
        Some(u64::from(d))
    }
}

/// Parses a standalone IPv4 literal in the permissive legacy grammar.
///
/// Whitespace, signs, empty segments, and anything past the final digit
/// are hard failures; so is exceeding 2^32-1 at any point during digit
/// accumulation.
pub(crate) fn parse(text: &str) -> Result<u32, MalformedAddress> {
    let s = text.as_bytes();
    let len = s.len();
    let mut parts = [0u64; 4];
    let mut dots = 0usize;
    let mut value = 0u64;
    let mut have_digit = false;
    let mut i = 0usize;

    while i < len {
        value = 0;
        have_digit = false;

        // Base detection: a bare "0" already counts as a complete octal
        // zero, but an "0x" prefix still needs at least one digit after it.
        let mut base = Base::Dec;
        if s[i] == b'0' {
            base = Base::Oct;
            have_digit = true;
            i += 1;
            if i < len && (s[i] == b'x' || s[i] == b'X') {
                base = Base::Hex;
                have_digit = false;
                i += 1;
            }
        }

        while i < len {
            let Some(d) = base.digit(s[i]) else { break };
            value = value * base as u64 + d;
            if value > MAX_VALUE {
                return Err(MalformedAddress::new());
            }
            have_digit = true;
            i += 1;
        }

        if i < len && s[i] == b'.' {
            // Segments left of the final one are plain bytes.
            if dots >= 3 || !have_digit || value > 0xFF {
                return Err(MalformedAddress::new());
            }
            parts[dots] = value;
            dots += 1;
            have_digit = false;
            i += 1;
            continue;
        }
        break;
    }

    // Anything other than a clean stop at the end of the text is a
    // malformed segment.
    if !have_digit || i != len {
        return Err(MalformedAddress::new());
    }
    parts[dots] = value;
    assemble(&parts, dots)
}

/// Packs the parsed segments into the 32-bit address. Leading segments
/// occupy the high-order bytes; the final segment supplies the remaining
/// low-order bits and is width-checked against the dot count.
fn assemble(parts: &[u64; 4], dots: usize) -> Result<u32, MalformedAddress> {
    let last = parts[dots];
    let limit = match dots {
        0 => MAX_VALUE,
        1 => 0x00FF_FFFF,
        2 => 0xFFFF,
        _ => 0xFF,
    };
    if last > limit {
        return Err(MalformedAddress::new());
    }

    let mut addr = 0u64;
    for part in &parts[..dots] {
        addr = (addr << 8) | part;
    }
    let final_width = 8 * (4 - dots as u32);
    Ok(((addr << final_width) | last) as u32)
}

/// Parses the strict 4-octet dotted-decimal form used when an IPv4
/// literal occupies the low 32 bits of an IPv6 address: exactly four
/// non-empty decimal segments, each 0-255. Leading zeros read
/// digit-by-digit as decimal, so `010` is ten, not eight.
pub(crate) fn parse_embedded(text: &str) -> Result<u32, MalformedAddress> {
    let mut value = 0u32;
    let mut count = 0usize;
    for octet in text.split('.') {
        count += 1;
        if count > 4 || octet.is_empty() {
            return Err(MalformedAddress::new());
        }
        let mut octet_value = 0u32;
        for b in octet.bytes() {
            if !b.is_ascii_digit() {
                return Err(MalformedAddress::new());
            }
            octet_value = octet_value * 10 + u32::from(b - b'0');
            if octet_value > 0xFF {
                return Err(MalformedAddress::new());
            }
        }
        value = (value << 8) | octet_value;
    }
    if count != 4 {
        return Err(MalformedAddress::new());
    }
    Ok(value)
}
