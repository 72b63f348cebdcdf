//! Error types for address parsing and bounded formatting.

use thiserror::Error;

/// Returned when a candidate address literal is rejected.
///
/// Every grammar violation anywhere in the pipeline collapses to this one
/// error; no partial address ever escapes. The nested cause exists for
/// callers that walk error chains and is synthesized, carrying no
/// input-derived detail.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Error)]
#[error("an invalid IP address was specified")]
pub struct MalformedAddress {
    #[source]
    cause: SyntaxViolation,
}

impl MalformedAddress {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

/// Generic low-level cause attached to [`MalformedAddress`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Error)]
#[error("the literal violates the accepted address grammar")]
struct SyntaxViolation;

/// Returned by the bounded formatting entry points when the destination
/// cannot hold the canonical text. Nothing has been written on this
/// outcome; it is an expected local condition, distinct from
/// [`MalformedAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("destination holds {available} units but the canonical form needs {needed}")]
pub struct DestinationTooSmall {
    /// Units (UTF-16 code units or UTF-8 bytes) the canonical text requires.
    pub needed: usize,
    /// Units the caller's destination can hold.
    pub available: usize,
}
