//! # Secure Envelopes
//!
//! [`SecureEnvelope`] is the native form of a single encrypted message as
//! seen by routing and client code. Conversion to the wire is total; the
//! reverse validates every identifier and fails on the first bad one.
//!
//! Sender and recipient are required. Group and conversation may be left
//! unset, in which case they travel as empty strings and come back as the
//! zero [`Urn`].

use serde::{Deserialize, Serialize};
use sm_core::Urn;

use crate::convert::{from_wire, optional_id, required_id, to_wire};
use crate::error::{ConversionError, IdField};
use crate::wire::{SecureEnvelopeListPb, SecureEnvelopePb};

/// A single end-to-end encrypted message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureEnvelope {
    pub message_id: String,
    pub sender_id: Urn,
    pub recipient_id: Urn,
    #[serde(default)]
    pub group_id: Urn,
    #[serde(default)]
    pub conversation_id: Urn,
    pub encrypted_data: Vec<u8>,
    pub encrypted_symmetric_key: Vec<u8>,
    pub signature: Vec<u8>,
    #[serde(default)]
    pub encrypted_snippet: Vec<u8>,
}

/// An ordered batch of envelopes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureEnvelopeList {
    pub envelopes: Vec<SecureEnvelope>,
}

impl From<&SecureEnvelope> for SecureEnvelopePb {
    fn from(native: &SecureEnvelope) -> Self {
        Self {
            message_id: native.message_id.clone(),
            sender_id: native.sender_id.to_string(),
            recipient_id: native.recipient_id.to_string(),
            group_id: native.group_id.to_string(),
            conversation_id: native.conversation_id.to_string(),
            encrypted_data: native.encrypted_data.clone(),
            encrypted_symmetric_key: native.encrypted_symmetric_key.clone(),
            signature: native.signature.clone(),
            encrypted_snippet: native.encrypted_snippet.clone(),
        }
    }
}

impl TryFrom<SecureEnvelopePb> for SecureEnvelope {
    type Error = ConversionError;

    fn try_from(wire: SecureEnvelopePb) -> Result<Self, Self::Error> {
        let sender_id = required_id(&wire.sender_id, IdField::Sender)?;
        let recipient_id = required_id(&wire.recipient_id, IdField::Recipient)?;
        let group_id = optional_id(&wire.group_id, IdField::Group)?;
        let conversation_id = optional_id(&wire.conversation_id, IdField::Conversation)?;

        Ok(Self {
            message_id: wire.message_id,
            sender_id,
            recipient_id,
            group_id,
            conversation_id,
            encrypted_data: wire.encrypted_data,
            encrypted_symmetric_key: wire.encrypted_symmetric_key,
            signature: wire.signature,
            encrypted_snippet: wire.encrypted_snippet,
        })
    }
}

impl From<&SecureEnvelopeList> for SecureEnvelopeListPb {
    fn from(native: &SecureEnvelopeList) -> Self {
        Self {
            envelopes: native.envelopes.iter().map(SecureEnvelopePb::from).collect(),
        }
    }
}

impl TryFrom<SecureEnvelopeListPb> for SecureEnvelopeList {
    type Error = ConversionError;

    fn try_from(wire: SecureEnvelopeListPb) -> Result<Self, Self::Error> {
        let envelopes = wire
            .envelopes
            .into_iter()
            .enumerate()
            .map(|(i, pb)| SecureEnvelope::try_from(pb).map_err(ConversionError::element(i)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { envelopes })
    }
}

/// Convert an envelope for transmission. `None` stays `None`.
pub fn envelope_to_wire(native: Option<&SecureEnvelope>) -> Option<SecureEnvelopePb> {
    to_wire(native)
}

/// Validate an inbound envelope. `None` is not an error.
///
/// # Errors
///
/// Returns [`ConversionError::Field`] naming the first identifier field that
/// is not a valid URN.
pub fn envelope_from_wire(
    wire: Option<SecureEnvelopePb>,
) -> Result<Option<SecureEnvelope>, ConversionError> {
    from_wire(wire).map_err(|e| {
        tracing::debug!(field = %e.failed_field(), error = %e, "rejected inbound envelope");
        e
    })
}

/// Convert an envelope list for transmission. `None` stays `None`.
pub fn envelope_list_to_wire(native: Option<&SecureEnvelopeList>) -> Option<SecureEnvelopeListPb> {
    to_wire(native)
}

/// Validate an inbound envelope list, all or nothing.
///
/// # Errors
///
/// Returns [`ConversionError::Element`] carrying the position of the first
/// envelope that fails.
pub fn envelope_list_from_wire(
    wire: Option<SecureEnvelopeListPb>,
) -> Result<Option<SecureEnvelopeList>, ConversionError> {
    from_wire(wire).map_err(|e| {
        tracing::debug!(
            index = ?e.index(),
            field = %e.failed_field(),
            error = %e,
            "rejected inbound envelope list"
        );
        e
    })
}
