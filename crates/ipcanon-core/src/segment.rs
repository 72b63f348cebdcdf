//! Pre-parse segmentation for IPv6 literals: bracket stripping, port
//! discarding, and zone-suffix extraction.
//!
//! Only the IPv6 pipeline runs through here. Bare IPv4 literals get no
//! bracket, port, or zone treatment, so `[192.168.0.1]` and
//! `192.168.0.0:80` stay rejected.

use crate::error::MalformedAddress;

/// Address body plus optional zone suffix, ready for group parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub body: &'a str,
    pub zone: Option<&'a str>,
}

/// Splits a raw IPv6 candidate into address body and zone suffix.
///
/// A leading `[` must have a matching `]`, and anything after the bracket
/// must be a `:`-introduced port, which is shape-checked and discarded.
/// Bracket characters anywhere else are a hard failure, as is more than
/// one `%`.
pub(crate) fn split(text: &str) -> Result<Segments<'_>, MalformedAddress> {
    let inner = match text.strip_prefix('[') {
        Some(rest) => {
            let close = rest.find(']').ok_or_else(MalformedAddress::new)?;
            let inside = &rest[..close];
            if inside.contains('[') {
                return Err(MalformedAddress::new());
            }
            let after = &rest[close + 1..];
            if !after.is_empty() {
                let port = after.strip_prefix(':').ok_or_else(MalformedAddress::new)?;
                check_port(port)?;
            }
            inside
        }
        None => {
            if text.contains('[') || text.contains(']') {
                return Err(MalformedAddress::new());
            }
            text
        }
    };

    match inner.find('%') {
        Some(pos) => {
            let zone = &inner[pos + 1..];
            if zone.contains('%') {
                return Err(MalformedAddress::new());
            }
            Ok(Segments {
                body: &inner[..pos],
                zone: Some(zone),
            })
        }
        None => Ok(Segments {
            body: inner,
            zone: None,
        }),
    }
}

/// The port value is never used, but its shape is still checked: decimal
/// digits, or hex digits behind a `0x`/`0X` prefix. An empty port after
/// the colon is tolerated.
fn check_port(port: &str) -> Result<(), MalformedAddress> {
    let ok = match port.strip_prefix("0x").or_else(|| port.strip_prefix("0X")) {
        Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => port.bytes().all(|b| b.is_ascii_digit()),
    };
    if ok { Ok(()) } else { Err(MalformedAddress::new()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(text: &str) -> &str {
        split(text).expect("should segment").body
    }

    #[test]
    fn test_plain_body_passes_through() {
        let seg = split("fe08::1").unwrap();
        assert_eq!(seg.body, "fe08::1");
        assert_eq!(seg.zone, None);
    }

    #[test]
    fn test_brackets_are_stripped() {
        assert_eq!(body_of("[fe08::1]"), "fe08::1");
        assert_eq!(body_of("[::]"), "::");
    }

    #[test]
    fn test_port_is_discarded() {
        assert_eq!(body_of("[fe08::1]:80"), "fe08::1");
        assert_eq!(body_of("[fe08::1]:0x80"), "fe08::1");
        assert_eq!(body_of("[fe08::1]:0XFA"), "fe08::1");
        // The delimiter alone is enough.
        assert_eq!(body_of("[fe08::1]:"), "fe08::1");
    }

    #[test]
    fn test_bad_ports_rejected() {
        assert!(split("[fe08::1]:80Z").is_err());
        assert!(split("[fe08::1]:443/").is_err());
        assert!(split("[fe08::1]80").is_err());
        assert!(split("[fe08::1]:8%0").is_err());
        // A hex prefix with no digits behind it is not a port.
        assert!(split("[fe08::1]:0x").is_err());
        assert!(split("[fe08::1]:0X").is_err());
    }

    #[test]
    fn test_bracket_mismatch_rejected() {
        assert!(split("[fe08::1").is_err());
        assert!(split("[[fe08::1").is_err());
        assert!(split("[[fe08::1]").is_err());
        assert!(split("fe08::1]").is_err());
        assert!(split("fe08::1]]").is_err());
        assert!(split("[fe08::1]]").is_err());
    }

    #[test]
    fn test_zone_is_split_off() {
        let seg = split("fe08::1%13542").unwrap();
        assert_eq!(seg.body, "fe08::1");
        assert_eq!(seg.zone, Some("13542"));

        let seg = split("[fe80::1%9]:80").unwrap();
        assert_eq!(seg.body, "fe80::1");
        assert_eq!(seg.zone, Some("9"));
    }

    #[test]
    fn test_empty_zone_is_kept() {
        let seg = split("fe08::1%").unwrap();
        assert_eq!(seg.body, "fe08::1");
        assert_eq!(seg.zone, Some(""));
    }

    #[test]
    fn test_second_percent_rejected() {
        assert!(split("fe08::1%a%b").is_err());
        assert!(split("[fe08::1%a%b]").is_err());
    }
}
