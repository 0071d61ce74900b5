//! # Error Hierarchy
//!
//! Structured error types for the identifier layer, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! [`UrnError`] is the single "invalid format" kind raised by this crate.
//! Its variants carry the detail of which structural rule was broken so that
//! callers can match on the cause instead of parsing a message string.

use thiserror::Error;

use crate::urn::{NAMESPACE, SCHEME};

/// A string or component pair does not form a valid URN.
///
/// Every variant is an invalid-format violation; they differ only in which
/// rule was broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrnError {
    /// The text did not split into the expected number of `:` segments.
    #[error("invalid URN format: expected {expected} parts, but got {actual}")]
    PartCount {
        /// Required segment count.
        expected: usize,
        /// Segment count found in the input.
        actual: usize,
    },

    /// The first segment is not the URN scheme.
    #[error(
        "invalid URN format: invalid scheme '{0}', expected '{expected}'",
        expected = SCHEME
    )]
    InvalidScheme(String),

    /// The second segment is not the secure-messaging namespace.
    #[error(
        "invalid URN format: invalid namespace '{0}', expected '{expected}'",
        expected = NAMESPACE
    )]
    InvalidNamespace(String),

    /// The entity type component is empty.
    #[error("invalid URN format: entity type cannot be empty")]
    EmptyEntityType,

    /// The entity ID component is empty.
    #[error("invalid URN format: entity ID cannot be empty")]
    EmptyEntityId,

    /// An empty string was supplied where an identifier was required.
    #[error("invalid URN format: identifier cannot be empty")]
    Empty,
}
