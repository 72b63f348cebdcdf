//! # ipcanon-core
//!
//! Parsing, validation, and canonical formatting for textual IP address
//! literals in the permissive legacy grammar: BSD-style decimal/hex/octal
//! IPv4 notation with 1-4 dotted segments, IPv6 zero-compression and
//! embedded IPv4 tails, zone suffixes, and bracket/port decoration.
//!
//! Every accepted literal maps to exactly one [`IpAddress`] value and every
//! value renders to exactly one canonical string. All operations are pure
//! and synchronous; allocation is limited to the returned result.

#![deny(unsafe_code)]

mod address;
mod error;
mod format;
mod scope;
mod segment;
mod v4;
mod v6;
mod validate;

pub use address::IpAddress;
pub use error::{DestinationTooSmall, MalformedAddress};
pub use validate::{is_valid, is_valid_utf8};
