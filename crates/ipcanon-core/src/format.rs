//! Canonical rendering of parsed addresses.
//!
//! IPv4 always renders as four decimal octets, whatever base produced it.
//! IPv6 renders lowercase hex groups with the longest zero run compressed
//! to `::`, a legacy dotted-decimal tail for the recognized embedded
//! prefixes, and a `%scope` suffix when the scope id is nonzero.

/// Renders an IPv4 value as dotted decimal.
pub(crate) fn v4(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Renders the canonical IPv6 form.
pub(crate) fn v6(groups: &[u16; 8], scope_id: u32) -> String {
    let hex_span: &[u16] = if has_embedded_tail(groups) {
        &groups[..6]
    } else {
        &groups[..]
    };
    let run = longest_zero_run(hex_span);

    let mut out = String::new();
    let mut i = 0usize;
    while i < hex_span.len() {
        if let Some((start, len)) = run
            && i == start
        {
            out.push_str("::");
            i += len;
            continue;
        }
        if !out.is_empty() && !out.ends_with(':') {
            out.push(':');
        }
        out.push_str(&format!("{:x}", hex_span[i]));
        i += 1;
    }

    if hex_span.len() < groups.len() {
        if !out.ends_with(':') {
            out.push(':');
        }
        let tail = (u32::from(groups[6]) << 16) | u32::from(groups[7]);
        out.push_str(&v4(tail));
    }

    if scope_id != 0 {
        out.push_str(&format!("%{scope_id}"));
    }
    out
}

/// True when the value renders its final 32 bits as dotted decimal: the
/// leading groups match `::`, `::ffff:`, or `::ffff:0:` with a nonzero
/// seventh group, or groups five and six form an ISATAP interface id
/// (`0:5efe`). Any other prefix renders as plain hex groups even if its
/// low bits could be read as an IPv4 address.
fn has_embedded_tail(groups: &[u16; 8]) -> bool {
    if groups[..4] == [0, 0, 0, 0]
        && groups[6] != 0
        && matches!((groups[4], groups[5]), (0, 0) | (0, 0xFFFF) | (0xFFFF, 0))
    {
        return true;
    }
    groups[4] == 0 && groups[5] == 0x5EFE
}

/// Longest run of consecutive zero groups, leftmost on ties. Runs of a
/// single zero group are not compressed.
fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = 0usize;
    let mut run_len = 0usize;
    for (i, &g) in groups.iter().enumerate() {
        if g == 0 {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len > best.map_or(1, |(_, len)| len) {
                best = Some((run_start, run_len));
            }
        } else {
            run_len = 0;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v4_is_always_decimal() {
        assert_eq!(v4(0x9D3B_191B), "157.59.25.27");
        assert_eq!(v4(0), "0.0.0.0");
        assert_eq!(v4(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_v6_compresses_longest_leftmost_run() {
        assert_eq!(v6(&[0; 8], 0), "::");
        assert_eq!(v6(&[0, 0, 0, 0, 0, 0, 0, 1], 0), "::1");
        assert_eq!(v6(&[1, 0, 0, 0, 0, 0, 0, 0], 0), "1::");
        assert_eq!(v6(&[1, 1, 0, 0, 1, 0, 0, 1], 0), "1:1::1:0:0:1");
        assert_eq!(v6(&[0x1234, 0, 0, 0, 0, 0x1234, 0, 0], 0), "1234::1234:0:0");
        assert_eq!(v6(&[0, 0, 1, 2, 0, 0, 0, 0], 0), "0:0:1:2::");
    }

    #[test]
    fn test_v6_never_compresses_single_zero() {
        assert_eq!(v6(&[1, 2, 3, 4, 5, 6, 7, 0], 0), "1:2:3:4:5:6:7:0");
        assert_eq!(v6(&[0, 2, 3, 4, 5, 6, 7, 8], 0), "0:2:3:4:5:6:7:8");
        assert_eq!(v6(&[1, 0, 1, 0, 1, 0, 1, 0], 0), "1:0:1:0:1:0:1:0");
    }

    #[test]
    fn test_v6_hex_is_lowercase_without_leading_zeros() {
        assert_eq!(
            v6(&[0x2001, 0xDB8, 0, 0, 0, 0, 0, 1], 0),
            "2001:db8::1"
        );
        assert_eq!(
            v6(&[0x3FFE, 0x38E1, 0, 0, 0, 0x100, 1, 1], 0),
            "3ffe:38e1::100:1:1"
        );
    }

    #[test]
    fn test_dotted_tail_for_recognized_prefixes() {
        assert_eq!(v6(&[0, 0, 0, 0, 0, 0, 0x0001, 0], 0), "::0.1.0.0");
        assert_eq!(v6(&[0, 0, 0, 0, 0, 0, 0x0A00, 1], 0), "::10.0.0.1");
        assert_eq!(
            v6(&[0, 0, 0, 0, 0, 0xFFFF, 0xC0A8, 1], 0),
            "::ffff:192.168.0.1"
        );
        assert_eq!(
            v6(&[0, 0, 0, 0, 0xFFFF, 0, 0xC0A8, 1], 0),
            "::ffff:0:192.168.0.1"
        );
        assert_eq!(v6(&[0, 0, 0, 0, 0, 0xFFFF, 0xFF, 0], 0), "::ffff:0.255.0.0");
    }

    #[test]
    fn test_no_dotted_tail_when_seventh_group_zero() {
        assert_eq!(v6(&[0, 0, 0, 0, 0, 0, 0, 0xFFFF], 0), "::ffff");
        assert_eq!(v6(&[0, 0, 0, 0, 0, 0xFFFF, 0, 1], 0), "::ffff:0:1");
    }

    #[test]
    fn test_no_dotted_tail_for_other_prefixes() {
        assert_eq!(
            v6(&[0xFE08, 0, 0, 0, 0, 0, 0xC0A8, 1], 0),
            "fe08::c0a8:1"
        );
        assert_eq!(
            v6(&[0, 0, 0, 0, 0, 0xEEEE, 0x0A00, 1], 0),
            "::eeee:a00:1"
        );
    }

    #[test]
    fn test_isatap_tail_is_dotted() {
        assert_eq!(
            v6(&[0, 0, 0, 0, 0, 0x5EFE, 0xC0A8, 1], 0),
            "::5efe:192.168.0.1"
        );
        assert_eq!(
            v6(&[1, 0, 0, 0, 0, 0x5EFE, 0xC0A8, 1], 0),
            "1::5efe:192.168.0.1"
        );
    }

    #[test]
    fn test_scope_suffix() {
        assert_eq!(v6(&[0xFE08, 0, 0, 0, 0, 0, 0, 1], 13542), "fe08::1%13542");
        assert_eq!(v6(&[0; 8], 123), "::%123");
        assert_eq!(v6(&[0xFE08, 0, 0, 0, 0, 0, 0, 1], 0), "fe08::1");
    }

    #[test]
    fn test_zero_run_selection() {
        assert_eq!(longest_zero_run(&[1, 2, 3]), None);
        assert_eq!(longest_zero_run(&[0, 1, 2]), None);
        assert_eq!(longest_zero_run(&[0, 0, 1]), Some((0, 2)));
        assert_eq!(longest_zero_run(&[1, 0, 0, 1, 0, 0, 0, 1]), Some((4, 3)));
        // Ties go to the leftmost run.
        assert_eq!(longest_zero_run(&[0, 0, 1, 0, 0, 1]), Some((0, 2)));
    }
}
