//! IPv6 group parsing: colon-delimited hextets, single-use `::`
//! compression, and an optional trailing embedded IPv4 literal.
//!
//! Compression is modeled explicitly: explicit groups are collected on
//! either side of the marker, then `8 - explicit` zero groups are inserted
//! at its position. An embedded IPv4 tail counts as two groups and is only
//! legal as the final element of the body.

use crate::error::MalformedAddress;
use crate::v4;

const GROUP_COUNT: usize = 8;

/// Parses an IPv6 address body (brackets, port, and zone already removed)
/// into its eight groups.
pub(crate) fn parse_groups(body: &str) -> Result<[u16; GROUP_COUNT], MalformedAddress> {
    if body.is_empty() {
        return Err(MalformedAddress::new());
    }
    // A lone leading or trailing colon is only legal as part of `::`.
    if body.starts_with(':') && !body.starts_with("::") {
        return Err(MalformedAddress::new());
    }
    if body.ends_with(':') && !body.ends_with("::") {
        return Err(MalformedAddress::new());
    }

    let (front, back) = match body.find("::") {
        Some(pos) => {
            if body[pos + 2..].contains("::") {
                return Err(MalformedAddress::new());
            }
            (&body[..pos], Some(&body[pos + 2..]))
        }
        None => (body, None),
    };

    let mut explicit = [0u16; GROUP_COUNT];
    let mut front_len = 0usize;
    let mut back_len = 0usize;
    let mut embedded: Option<u32> = None;

    match back {
        Some(back_str) => {
            // Groups before the marker can never be final, so no embedded
            // IPv4 is allowed there.
            let mut scratch = 0usize;
            scan_section(front, false, &mut explicit, &mut scratch, &mut embedded)?;
            front_len = scratch;
            scan_section(back_str, true, &mut explicit, &mut scratch, &mut embedded)?;
            back_len = scratch - front_len;
        }
        None => {
            scan_section(body, true, &mut explicit, &mut front_len, &mut embedded)?;
        }
    }

    let embedded_groups = if embedded.is_some() { 2 } else { 0 };
    let total = front_len + back_len + embedded_groups;
    if back.is_some() {
        // The marker must stand for at least one omitted group.
        if total >= GROUP_COUNT {
            return Err(MalformedAddress::new());
        }
    } else if total != GROUP_COUNT {
        return Err(MalformedAddress::new());
    }

    let mut groups = [0u16; GROUP_COUNT];
    groups[..front_len].copy_from_slice(&explicit[..front_len]);
    let mut at = front_len + (GROUP_COUNT - total);
    groups[at..at + back_len].copy_from_slice(&explicit[front_len..front_len + back_len]);
    at += back_len;
    if let Some(bits) = embedded {
        groups[at] = (bits >> 16) as u16;
        groups[at + 1] = bits as u16;
    }
    Ok(groups)
}

/// Scans one colon-delimited section into `groups[*len..]`. When the
/// section's last part contains a dot and an embedded tail is allowed, it
/// is parsed as a strict dotted-decimal quad instead of a hextet.
fn scan_section(
    section: &str,
    embedded_tail_allowed: bool,
    groups: &mut [u16; GROUP_COUNT],
    len: &mut usize,
    embedded: &mut Option<u32>,
) -> Result<(), MalformedAddress> {
    if section.is_empty() {
        return Ok(());
    }
    let mut parts = section.split(':').peekable();
    while let Some(part) = parts.next() {
        let is_last = parts.peek().is_none();
        if is_last && embedded_tail_allowed && part.contains('.') {
            *embedded = Some(v4::parse_embedded(part)?);
            return Ok(());
        }
        if *len >= GROUP_COUNT {
            return Err(MalformedAddress::new());
        }
        groups[*len] = parse_hextet(part)?;
        *len += 1;
    }
    Ok(())
}

/// One group: 1-4 case-insensitive hex digits, nothing else.
fn parse_hextet(group: &str) -> Result<u16, MalformedAddress> {
    if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(MalformedAddress::new());
    }
    u16::from_str_radix(group, 16).map_err(|_| MalformedAddress::new())
}
