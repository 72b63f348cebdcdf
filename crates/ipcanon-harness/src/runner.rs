//! Fixture execution against the engine.

use ipcanon_core::{IpAddress, is_valid, is_valid_utf8};

use crate::fixtures::{FixtureCase, FixtureSet};

/// Result of one fixture case.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CaseOutcome {
    pub case_name: String,
    pub input: String,
    pub passed: bool,
    pub expected: Option<String>,
    pub actual: Option<String>,
    /// Human-readable mismatch description, empty on pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Runs every case of a set.
pub fn run_fixture_set(set: &FixtureSet) -> Vec<CaseOutcome> {
    set.cases.iter().map(run_case).collect()
}

fn run_case(case: &FixtureCase) -> CaseOutcome {
    let parsed = IpAddress::parse(&case.input);
    let actual = parsed.as_ref().ok().map(ToString::to_string);

    let mut diff = match (&case.expected, &parsed) {
        (Some(expected), Ok(_)) => {
            let actual = actual.as_deref().unwrap_or_default();
            (actual != expected.as_str())
                .then(|| format!("canonical form mismatch: expected {expected:?}, got {actual:?}"))
        }
        (Some(_), Err(_)) => Some("expected acceptance, parser rejected the input".to_owned()),
        (None, Ok(_)) => Some("expected rejection, parser accepted the input".to_owned()),
        (None, Err(_)) => None,
    };

    if diff.is_none()
        && let Some(scope) = case.scope_id
        && let Ok(address) = &parsed
        && address.scope_id() != scope
    {
        diff = Some(format!(
            "scope mismatch: expected {scope}, got {}",
            address.scope_id()
        ));
    }

    // The validators never disagree with the parser.
    if diff.is_none()
        && (is_valid(&case.input) != parsed.is_ok()
            || is_valid_utf8(case.input.as_bytes()) != parsed.is_ok())
    {
        diff = Some("validator disagrees with the parser".to_owned());
    }

    CaseOutcome {
        case_name: case.name.clone(),
        input: case.input.clone(),
        passed: diff.is_none(),
        expected: case.expected.clone(),
        actual,
        diff,
    }
}
