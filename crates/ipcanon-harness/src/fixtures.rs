//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Literal handed to the parser.
    pub input: String,
    /// Canonical rendering, `None` when the input must be rejected.
    pub expected: Option<String>,
    /// Expected scope identifier, checked only when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_id: Option<u32>,
}

impl FixtureCase {
    /// Case that must parse and render as `expected`.
    pub fn accepted(name: impl Into<String>, input: impl Into<String>, expected: &str) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            expected: Some(expected.to_owned()),
            scope_id: None,
        }
    }

    /// Case that must be rejected.
    pub fn rejected(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            expected: None,
            scope_id: None,
        }
    }
}

/// A collection of fixture cases for one corpus family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Corpus family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(family: impl Into<String>, cases: Vec<FixtureCase>) -> Self {
        Self {
            version: Self::SCHEMA_VERSION.to_owned(),
            family: family.into(),
            cases,
        }
    }

    /// Load fixture set from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| HarnessError::Decode {
            path: path.to_owned(),
            source,
        })
    }

    /// Write fixture set to a file path.
    pub fn to_file(&self, path: &Path) -> Result<(), HarnessError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| HarnessError::Write {
            path: path.to_owned(),
            source,
        })
    }
}
