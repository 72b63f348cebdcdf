//! Conformance harness for the IP literal engine.
//!
//! This crate provides:
//! - Fixture capture: write the built-in corpus as JSON reference data
//! - Fixture verify: run fixture files against `ipcanon-core`
//! - Report generation: human-readable + machine-readable results

#![forbid(unsafe_code)]

pub mod corpus;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::VerificationReport;
pub use runner::{CaseOutcome, run_fixture_set};
