//! The parsed address value and its public operations.

use std::fmt;
use std::str::FromStr;

use crate::error::{DestinationTooSmall, MalformedAddress};
use crate::{format, scope, segment, v4, v6};

/// A parsed network address: a fully determined 32-bit IPv4 value, or
/// eight 16-bit IPv6 groups plus a scope id.
///
/// Values are immutable and compare bit-for-bit; the textual base, case,
/// leading zeros, or bracket/port decoration used to produce them never
/// influences equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddress {
    /// IPv4, most significant octet in the high byte.
    V4 {
        /// The packed 32-bit address.
        value: u32,
    },
    /// IPv6; `groups[0]` is the most significant hextet.
    V6 {
        /// The eight groups after any `::` compression is expanded.
        groups: [u16; 8],
        /// Zone scope id; 0 when the literal carried no usable zone suffix.
        scope_id: u32,
    },
}

impl IpAddress {
    /// Parses a candidate literal in the permissive legacy grammar.
    ///
    /// Text containing a colon takes the IPv6 pipeline, with bracket,
    /// port, and zone handling; anything else is read as a bare IPv4
    /// literal. Every violation collapses to [`MalformedAddress`].
    pub fn parse(text: &str) -> Result<Self, MalformedAddress> {
        if text.contains(':') {
            let seg = segment::split(text)?;
            let groups = v6::parse_groups(seg.body)?;
            let scope_id = seg.zone.map_or(0, scope::parse);
            Ok(Self::V6 { groups, scope_id })
        } else {
            v4::parse(text).map(|value| Self::V4 { value })
        }
    }

    /// Parses a UTF-8 byte candidate. The accepted grammar is pure ASCII,
    /// so input that is not valid UTF-8 is malformed by construction.
    pub fn parse_utf8(bytes: &[u8]) -> Result<Self, MalformedAddress> {
        let text = std::str::from_utf8(bytes).map_err(|_| MalformedAddress::new())?;
        Self::parse(text)
    }

    /// Non-failing variant of [`parse`](Self::parse).
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Writes the canonical text as UTF-8 into `dst` and returns the exact
    /// byte count. If `dst` is too small nothing is written at all.
    pub fn try_format_utf8(&self, dst: &mut [u8]) -> Result<usize, DestinationTooSmall> {
        let text = self.canonical();
        let bytes = text.as_bytes();
        if dst.len() < bytes.len() {
            return Err(DestinationTooSmall {
                needed: bytes.len(),
                available: dst.len(),
            });
        }
        dst[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    /// Writes the canonical text as UTF-16 code units into `dst` and
    /// returns the exact unit count. The canonical form is ASCII, so each
    /// byte maps to one unit. If `dst` is too small nothing is written.
    pub fn try_format_utf16(&self, dst: &mut [u16]) -> Result<usize, DestinationTooSmall> {
        let text = self.canonical();
        if dst.len() < text.len() {
            return Err(DestinationTooSmall {
                needed: text.len(),
                available: dst.len(),
            });
        }
        for (unit, byte) in dst.iter_mut().zip(text.bytes()) {
            *unit = u16::from(byte);
        }
        Ok(text.len())
    }

    /// True for the `V4` variant.
    pub fn is_v4(&self) -> bool {
        matches!(self, Self::V4 { .. })
    }

    /// True for the `V6` variant.
    pub fn is_v6(&self) -> bool {
        matches!(self, Self::V6 { .. })
    }

    /// The scope id; always 0 for IPv4.
    pub fn scope_id(&self) -> u32 {
        match self {
            Self::V4 { .. } => 0,
            Self::V6 { scope_id, .. } => *scope_id,
        }
    }

    fn canonical(&self) -> String {
        match self {
            Self::V4 { value } => format::v4(*value),
            Self::V6 { groups, scope_id } => format::v6(groups, *scope_id),
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for IpAddress {
    type Err = MalformedAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
