//! # Transport Errors
//!
//! Conversion failures wrap the underlying [`UrnError`] with the context of
//! where it happened: which identifier field, and for list-shaped messages
//! which element. The cause stays reachable through [`ConversionError::urn_error`]
//! and `std::error::Error::source`, so callers can match on it rather than
//! on the rendered message.

use std::fmt;

use sm_core::UrnError;
use thiserror::Error;

/// Identifier-bearing fields on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdField {
    Sender,
    Recipient,
    Group,
    Conversation,
}

impl IdField {
    /// Lowercase field name as used in error messages and log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sender => "sender",
            Self::Recipient => "recipient",
            Self::Group => "group",
            Self::Conversation => "conversation",
        }
    }
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inbound wire message failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// An identifier field did not hold a valid URN.
    #[error("failed to parse {field} id: {source}")]
    Field {
        /// The field that failed.
        field: IdField,
        /// The format violation.
        #[source]
        source: UrnError,
    },

    /// An element of a list-shaped message failed.
    #[error("item {index}: {source}")]
    Element {
        /// Zero-based position of the failing element.
        index: usize,
        /// What went wrong with that element.
        #[source]
        source: Box<ConversionError>,
    },
}

impl ConversionError {
    pub(crate) fn field(field: IdField) -> impl FnOnce(UrnError) -> Self {
        move |source| Self::Field { field, source }
    }

    pub(crate) fn element(index: usize) -> impl FnOnce(Self) -> Self {
        move |source| Self::Element {
            index,
            source: Box::new(source),
        }
    }

    /// The identifier field that failed, looking through element wrappers.
    pub fn failed_field(&self) -> IdField {
        match self {
            Self::Field { field, .. } => *field,
            Self::Element { source, .. } => source.failed_field(),
        }
    }

    /// The outermost element index, if the failure came from a list.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Field { .. } => None,
            Self::Element { index, .. } => Some(*index),
        }
    }

    /// The underlying format violation.
    pub fn urn_error(&self) -> &UrnError {
        match self {
            Self::Field { source, .. } => source,
            Self::Element { source, .. } => source.urn_error(),
        }
    }
}

/// Failure decoding a wire buffer into a validated native value.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The buffer exceeds the configured size limit.
    #[error("message of {len} bytes exceeds limit of {max} bytes")]
    MessageTooLarge {
        /// Buffer length.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A list or digest carries more entries than allowed.
    #[error("{kind} has {count} entries, limit is {max}")]
    TooManyEntries {
        /// Message kind (`"envelope list"`, `"digest"`).
        kind: &'static str,
        /// Entry count found.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The buffer is not a valid protobuf encoding of the expected message.
    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The decoded message failed validation.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: \"{value}\" (expected a positive integer)")]
    InvalidValue { var: String, value: String },
}
