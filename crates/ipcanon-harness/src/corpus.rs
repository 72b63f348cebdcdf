//! Built-in reference corpus, one fixture set per family.

use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureSet};

/// Family names understood by `builtin`.
pub const FAMILIES: &[&str] = &["v4", "v6", "scope", "invalid"];

/// Builds the built-in fixture set for a family.
pub fn builtin(family: &str) -> Result<FixtureSet, HarnessError> {
    match family {
        "v4" => Ok(v4_set()),
        "v6" => Ok(v6_set()),
        "scope" => Ok(scope_set()),
        "invalid" => Ok(invalid_set()),
        other => Err(HarnessError::UnknownFamily(other.to_owned())),
    }
}

fn accepted(cases: &mut Vec<FixtureCase>, prefix: &str, rows: &[(&str, &str)]) {
    for (index, &(input, expected)) in rows.iter().enumerate() {
        cases.push(FixtureCase::accepted(
            format!("{prefix}_{index:03}"),
            input,
            expected,
        ));
    }
}

fn rejected(cases: &mut Vec<FixtureCase>, prefix: &str, rows: &[&str]) {
    for (index, &input) in rows.iter().enumerate() {
        cases.push(FixtureCase::rejected(format!("{prefix}_{index:03}"), input));
    }
}

fn v4_set() -> FixtureSet {
    let mut cases = Vec::new();
    accepted(
        &mut cases,
        "decimal",
        &[
            ("192.168.0.1", "192.168.0.1"),
            ("0", "0.0.0.0"),
            ("12.1.7", "12.1.0.7"),
            ("20.65535", "20.0.255.255"),
            ("157.3873051", "157.59.25.27"),
            ("4294967295", "255.255.255.255"),
        ],
    );
    accepted(
        &mut cases,
        "hex",
        &[
            ("0x0", "0.0.0.0"),
            ("0xFFFFFFFF", "255.255.255.255"),
            ("0X9D.0x3B.0X19.0x1B", "157.59.25.27"),
            ("0x89.0xab.0xcd.0xef", "137.171.205.239"),
        ],
    );
    accepted(
        &mut cases,
        "octal",
        &[
            ("0313.027035210", "203.92.58.136"),
            ("037777777777", "255.255.255.255"),
            ("0235.073.031.033", "157.59.25.27"),
            ("157.59.0x25.033", "157.59.37.27"),
        ],
    );
    FixtureSet::new("v4", cases)
}

fn v6_set() -> FixtureSet {
    let mut cases = Vec::new();
    accepted(
        &mut cases,
        "canonical",
        &[
            ("Fe08::1", "fe08::1"),
            ("::", "::"),
            ("0:0:0:0:1:0:0:0", "::1:0:0:0"),
            ("1:0:0:0:0:0:0:0", "1::"),
            ("1:1:0:0:1:0:0:1", "1:1::1:0:0:1"),
            ("1:2:3:4:5:6:7::", "1:2:3:4:5:6:7:0"),
            ("::2:3:4:5:6:7:8", "0:2:3:4:5:6:7:8"),
            ("2001:0db8::0001", "2001:db8::1"),
            ("::7711:ab42:1230:0:0:0", "0:0:7711:ab42:1230::"),
        ],
    );
    accepted(
        &mut cases,
        "dotted_tail",
        &[
            ("0:0:0:0:0:0:1:0", "::0.1.0.0"),
            ("0:0:0:0:0:FFFF:1:0", "::ffff:0.1.0.0"),
            ("::FFFF:192.168.0.1", "::ffff:192.168.0.1"),
            ("::0.0.255.255", "::ffff"),
            ("::EEEE:10.0.0.1", "::eeee:a00:1"),
            ("FE08::192.168.0.1", "fe08::c0a8:1"),
            ("::5EFE:192.168.0.1", "::5efe:192.168.0.1"),
            ("1::5EFE:192.168.0.1", "1::5efe:192.168.0.1"),
            ("::192.168.0.010", "::192.168.0.10"),
        ],
    );
    accepted(
        &mut cases,
        "outer",
        &[
            ("[Fe08::1]", "fe08::1"),
            ("[Fe08::1]:80", "fe08::1"),
            ("[Fe08::1]:0xFA", "fe08::1"),
            ("Fe08::1%13542", "fe08::1%13542"),
            ("Fe08::1%unknowninterface", "fe08::1"),
        ],
    );
    FixtureSet::new("v6", cases)
}

fn scope_set() -> FixtureSet {
    let rows: &[(&str, &str, u32)] = &[
        ("Fe08::1%123", "fe08::1%123", 123),
        ("Fe08::1%12345678", "fe08::1%12345678", 12345678),
        ("fe80::e8b0:63ff:fee8:6b3b%9", "fe80::e8b0:63ff:fee8:6b3b%9", 9),
        ("fe80::e8b0:63ff:fee8:6b3b", "fe80::e8b0:63ff:fee8:6b3b", 0),
        ("::%unknownInterface", "::", 0),
        ("::%0", "::", 0),
    ];
    let cases = rows
        .iter()
        .enumerate()
        .map(|(index, &(input, expected, scope_id))| FixtureCase {
            name: format!("scope_{index:03}"),
            input: input.to_owned(),
            expected: Some(expected.to_owned()),
            scope_id: Some(scope_id),
        })
        .collect();
    FixtureSet::new("scope", cases)
}

fn invalid_set() -> FixtureSet {
    let mut cases = Vec::new();
    rejected(
        &mut cases,
        "v4",
        &[
            " 127.0.0.1",
            "192.168.0.0/16",
            "260.156",
            "255.1.1.256",
            "4294967296",
            "0x100000000",
            "1.1.1.",
            ".1.1.1",
            "12.+1.1.4",
            "12.1.abc.5",
            "192.168.0.0:80",
            "0.0.0.089",
        ],
    );
    rejected(
        &mut cases,
        "v6",
        &[
            ":::4df",
            "0:0:0:0:0:0:0:0:0",
            "0:0:0:0:0:0:0",
            "0FFFF::",
            "[::1",
            "Fe08::/64",
            "[Fe08::1]:80Z",
            ":1",
            "1:",
            "1::1::1",
            "::1:2:3:4:5:6:7:8",
            "FE08::260.168.0.1",
            "::192.168.0.0x0",
            "G::",
            "1::%1%2",
            "[]",
        ],
    );
    // A bad dotted tail stays bad behind every accepting prefix shape.
    let prefixes = ["3fff:ffff:ffff:ffff:ffff:ffff:ffff:", "::", "::FF:", "::5EFE:", "1::5EFE:"];
    let tails = ["260.156", "1.1.1.", "12.1.abc.5", "0x.1.1.1"];
    let spliced: Vec<String> = prefixes
        .iter()
        .flat_map(|prefix| tails.iter().map(move |tail| format!("{prefix}{tail}")))
        .collect();
    let spliced_refs: Vec<&str> = spliced.iter().map(String::as_str).collect();
    rejected(&mut cases, "v6_tail", &spliced_refs);
    FixtureSet::new("invalid", cases)
}
