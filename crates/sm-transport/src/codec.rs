//! Bytes-level helpers.
//!
//! Encode native values straight to protobuf bytes, and decode untrusted
//! buffers into validated native values under [`WireLimits`]:
//!
//! ```text
//! bytes -> size check -> prost decode -> entry-count check -> TryFrom (validation)
//! ```
//!
//! The conversion modules never call into this one; callers that already
//! hold wire structs use the `*_from_wire` functions directly.

use prost::Message;

use crate::config::WireLimits;
use crate::digest::EncryptedDigest;
use crate::envelope::{SecureEnvelope, SecureEnvelopeList};
use crate::error::{ConversionError, TransportError};
use crate::notification::NotificationRequest;
use crate::wire::{EncryptedDigestPb, NotificationRequestPb, SecureEnvelopeListPb, SecureEnvelopePb};

/// Encode a single envelope to protobuf bytes.
pub fn encode_envelope(native: &SecureEnvelope) -> Vec<u8> {
    SecureEnvelopePb::from(native).encode_to_vec()
}

/// Encode an envelope list to protobuf bytes.
pub fn encode_envelope_list(native: &SecureEnvelopeList) -> Vec<u8> {
    SecureEnvelopeListPb::from(native).encode_to_vec()
}

/// Encode a digest to protobuf bytes, holes included.
pub fn encode_digest(native: &EncryptedDigest) -> Vec<u8> {
    EncryptedDigestPb::from(native).encode_to_vec()
}

/// Encode a notification request to protobuf bytes.
pub fn encode_notification(native: &NotificationRequest) -> Vec<u8> {
    NotificationRequestPb::from(native).encode_to_vec()
}

/// Decode and validate a single envelope.
///
/// # Errors
///
/// Returns a [`TransportError`] if the buffer is too large, is not a valid
/// encoding, or carries an invalid identifier.
pub fn decode_envelope(
    bytes: &[u8],
    limits: &WireLimits,
) -> Result<SecureEnvelope, TransportError> {
    let wire: SecureEnvelopePb = decode_bounded(bytes, limits, "envelope")?;
    validate(wire, "envelope")
}

/// Decode and validate an envelope list, all or nothing.
///
/// # Errors
///
/// As [`decode_envelope`], plus [`TransportError::TooManyEntries`] when the
/// list is longer than `limits.max_list_entries`.
pub fn decode_envelope_list(
    bytes: &[u8],
    limits: &WireLimits,
) -> Result<SecureEnvelopeList, TransportError> {
    const KIND: &str = "envelope list";
    let wire: SecureEnvelopeListPb = decode_bounded(bytes, limits, KIND)?;
    check_entries(KIND, wire.envelopes.len(), limits.max_list_entries)?;
    validate(wire, KIND)
}

/// Decode and validate a digest. Holes are counted against the limit.
///
/// # Errors
///
/// As [`decode_envelope`], plus [`TransportError::TooManyEntries`] when the
/// digest is longer than `limits.max_digest_items`.
pub fn decode_digest(
    bytes: &[u8],
    limits: &WireLimits,
) -> Result<EncryptedDigest, TransportError> {
    const KIND: &str = "digest";
    let wire: EncryptedDigestPb = decode_bounded(bytes, limits, KIND)?;
    check_entries(KIND, wire.items.len(), limits.max_digest_items)?;
    validate(wire, KIND)
}

/// Decode and validate a notification request.
///
/// # Errors
///
/// As [`decode_envelope`].
pub fn decode_notification(
    bytes: &[u8],
    limits: &WireLimits,
) -> Result<NotificationRequest, TransportError> {
    let wire: NotificationRequestPb = decode_bounded(bytes, limits, "notification request")?;
    validate(wire, "notification request")
}

fn decode_bounded<W>(
    bytes: &[u8],
    limits: &WireLimits,
    kind: &'static str,
) -> Result<W, TransportError>
where
    W: Message + Default,
{
    if bytes.len() > limits.max_message_bytes {
        tracing::warn!(
            kind,
            len = bytes.len(),
            max = limits.max_message_bytes,
            "rejecting oversized wire message"
        );
        return Err(TransportError::MessageTooLarge {
            len: bytes.len(),
            max: limits.max_message_bytes,
        });
    }

    let wire = W::decode(bytes)?;
    tracing::trace!(kind, len = bytes.len(), "decoded wire message");
    Ok(wire)
}

fn check_entries(kind: &'static str, count: usize, max: usize) -> Result<(), TransportError> {
    if count > max {
        tracing::warn!(kind, count, max, "rejecting wire message with too many entries");
        return Err(TransportError::TooManyEntries { kind, count, max });
    }
    Ok(())
}

fn validate<W, N>(wire: W, kind: &'static str) -> Result<N, TransportError>
where
    N: TryFrom<W, Error = ConversionError>,
{
    N::try_from(wire).map_err(|e| {
        tracing::debug!(
            kind,
            index = ?e.index(),
            field = %e.failed_field(),
            error = %e,
            "rejected inbound message"
        );
        TransportError::Conversion(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::EncryptedDigestItem;
    use crate::error::IdField;
    use sm_core::urn::ENTITY_TYPE_CONVERSATION;
    use sm_core::Urn;

    fn envelope() -> SecureEnvelope {
        SecureEnvelope {
            message_id: "msg-1".to_string(),
            sender_id: Urn::new("user", "alice").unwrap(),
            recipient_id: Urn::new("user", "bob").unwrap(),
            encrypted_data: vec![1, 2, 3],
            encrypted_symmetric_key: vec![4, 5],
            signature: vec![6],
            ..SecureEnvelope::default()
        }
    }

    #[test]
    fn envelope_bytes_round_trip() {
        let bytes = encode_envelope(&envelope());
        let back = decode_envelope(&bytes, &WireLimits::default()).unwrap();
        assert_eq!(back, envelope());
    }

    #[test]
    fn oversized_buffer_rejected_before_decode() {
        let limits = WireLimits {
            max_message_bytes: 4,
            ..WireLimits::default()
        };
        let err = decode_envelope(&encode_envelope(&envelope()), &limits).unwrap_err();
        assert!(matches!(err, TransportError::MessageTooLarge { max: 4, .. }));
    }

    #[test]
    fn garbage_is_decode_error() {
        let err = decode_envelope(&[0xff, 0xff, 0xff], &WireLimits::default()).unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn invalid_identifier_is_conversion_error() {
        let mut wire = SecureEnvelopePb::from(&envelope());
        wire.recipient_id = "not-a-valid-urn".to_string();
        let err = decode_envelope(&wire.encode_to_vec(), &WireLimits::default()).unwrap_err();
        match err {
            TransportError::Conversion(e) => assert_eq!(e.failed_field(), IdField::Recipient),
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn list_entry_limit() {
        let list = SecureEnvelopeList {
            envelopes: vec![envelope(), envelope(), envelope()],
        };
        let limits = WireLimits {
            max_list_entries: 2,
            ..WireLimits::default()
        };
        let err = decode_envelope_list(&encode_envelope_list(&list), &limits).unwrap_err();
        assert!(matches!(
            err,
            TransportError::TooManyEntries {
                count: 3,
                max: 2,
                ..
            }
        ));
        let bytes = encode_envelope_list(&list);
        let ok = decode_envelope_list(&bytes, &WireLimits::default()).unwrap();
        assert_eq!(ok, list);
    }

    #[test]
    fn digest_holes_survive_bytes() {
        let digest = EncryptedDigest {
            items: vec![
                None,
                Some(EncryptedDigestItem {
                    conversation_id: Urn::new(ENTITY_TYPE_CONVERSATION, "c-1").unwrap(),
                    encrypted_snippet: b"s".to_vec(),
                    encrypted_symmetric_key: b"k".to_vec(),
                }),
                None,
            ],
        };
        let back = decode_digest(&encode_digest(&digest), &WireLimits::default()).unwrap();
        assert_eq!(back, digest);

        let limits = WireLimits {
            max_digest_items: 2,
            ..WireLimits::default()
        };
        assert!(decode_digest(&encode_digest(&digest), &limits).is_err());
    }
}
