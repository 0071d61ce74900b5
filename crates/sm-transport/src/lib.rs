//! # sm-transport — Envelope Transport Model
//!
//! Maps native messaging types to and from the protobuf wire schema.
//! Outbound conversion is total. Inbound conversion treats the wire as
//! untrusted: every identifier is parsed into a [`sm_core::Urn`], the first
//! invalid one rejects the whole message, and the error says which field (and
//! for lists, which element) failed.
//!
//! ## Conventions
//!
//! - Every message type has a `From<&Native> for Wire` and a
//!   `TryFrom<Wire> for Native` impl.
//! - The `*_to_wire` / `*_from_wire` functions take `Option`s: absent in,
//!   absent out, never an error.
//! - No partial results. A conversion either fully succeeds or returns no
//!   value.
//! - Everything here is pure and synchronous; safe to call from any thread.

pub mod codec;
pub mod config;
pub mod convert;
pub mod digest;
pub mod envelope;
pub mod error;
pub mod notification;
pub mod wire;

// Re-export primary types at crate root for ergonomic imports.
pub use config::WireLimits;
pub use digest::{digest_from_wire, digest_to_wire, EncryptedDigest, EncryptedDigestItem};
pub use envelope::{
    envelope_from_wire, envelope_list_from_wire, envelope_list_to_wire, envelope_to_wire,
    SecureEnvelope, SecureEnvelopeList,
};
pub use error::{ConfigError, ConversionError, IdField, TransportError};
pub use notification::{
    notification_from_wire, notification_to_wire, DeviceToken, NotificationContent,
    NotificationRequest,
};
pub use sm_core::{Urn, UrnError};
