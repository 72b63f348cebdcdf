//! Verification report rendering.

use std::path::Path;

use serde::Serialize;
use sha2::Digest;

use crate::error::HarnessError;
use crate::runner::CaseOutcome;

/// Machine-readable verification summary for one fixture set.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub family: String,
    /// Lowercase hex sha256 of the fixture file, empty for built-ins.
    pub fixture_digest: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl VerificationReport {
    pub fn new(family: impl Into<String>, fixture_digest: String, outcomes: Vec<CaseOutcome>) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            family: family.into(),
            fixture_digest,
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            outcomes,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Renders a markdown summary with one row per failing case.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Conformance report: {}\n\n", self.family));
        if !self.fixture_digest.is_empty() {
            out.push_str(&format!("Fixture sha256: `{}`\n\n", self.fixture_digest));
        }
        out.push_str(&format!(
            "{} cases, {} passed, {} failed\n",
            self.total, self.passed, self.failed
        ));
        if self.failed > 0 {
            out.push_str("\n| case | input | detail |\n|---|---|---|\n");
            for outcome in self.outcomes.iter().filter(|o| !o.passed) {
                out.push_str(&format!(
                    "| {} | `{}` | {} |\n",
                    outcome.case_name,
                    outcome.input,
                    outcome.diff.as_deref().unwrap_or("unknown"),
                ));
            }
        }
        out
    }
}

/// Lowercase hex sha256 of a file's contents.
pub fn sha256_hex(path: &Path) -> Result<String, HarnessError> {
    let data = std::fs::read(path).map_err(|source| HarnessError::Read {
        path: path.to_owned(),
        source,
    })?;
    let digest = sha2::Sha256::digest(&data);
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    Ok(out)
}
