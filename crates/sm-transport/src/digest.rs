//! # Encrypted Digests
//!
//! A digest is an ordered list of per-conversation encrypted summaries.
//! Positions are meaningful: callers may use indices as correlation keys, so
//! an absent entry (a hole) is kept at its index in both directions instead
//! of being dropped or compacted.

use serde::{Deserialize, Serialize};
use sm_core::Urn;

use crate::convert::{from_wire, required_id, to_wire};
use crate::error::{ConversionError, IdField};
use crate::wire::{DigestEntryPb, EncryptedDigestItemPb, EncryptedDigestPb};

/// Lightweight encrypted summary of one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedDigestItem {
    pub conversation_id: Urn,
    pub encrypted_snippet: Vec<u8>,
    pub encrypted_symmetric_key: Vec<u8>,
}

/// Index-aligned digest. `None` entries are holes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedDigest {
    pub items: Vec<Option<EncryptedDigestItem>>,
}

impl EncryptedDigest {
    /// Iterate over the present items with their positions.
    pub fn present(&self) -> impl Iterator<Item = (usize, &EncryptedDigestItem)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_ref().map(|item| (i, item)))
    }
}

impl From<&EncryptedDigestItem> for EncryptedDigestItemPb {
    fn from(native: &EncryptedDigestItem) -> Self {
        Self {
            conversation_id: native.conversation_id.to_string(),
            encrypted_snippet: native.encrypted_snippet.clone(),
            encrypted_symmetric_key: native.encrypted_symmetric_key.clone(),
        }
    }
}

impl TryFrom<EncryptedDigestItemPb> for EncryptedDigestItem {
    type Error = ConversionError;

    fn try_from(wire: EncryptedDigestItemPb) -> Result<Self, Self::Error> {
        Ok(Self {
            conversation_id: required_id(&wire.conversation_id, IdField::Conversation)?,
            encrypted_snippet: wire.encrypted_snippet,
            encrypted_symmetric_key: wire.encrypted_symmetric_key,
        })
    }
}

impl From<&EncryptedDigest> for EncryptedDigestPb {
    fn from(native: &EncryptedDigest) -> Self {
        Self {
            items: native
                .items
                .iter()
                .map(|item| DigestEntryPb {
                    item: item.as_ref().map(EncryptedDigestItemPb::from),
                })
                .collect(),
        }
    }
}

impl TryFrom<EncryptedDigestPb> for EncryptedDigest {
    type Error = ConversionError;

    fn try_from(wire: EncryptedDigestPb) -> Result<Self, Self::Error> {
        let items = wire
            .items
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                entry
                    .item
                    .map(EncryptedDigestItem::try_from)
                    .transpose()
                    .map_err(ConversionError::element(i))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }
}

/// Convert a digest for transmission, keeping holes in place.
pub fn digest_to_wire(native: Option<&EncryptedDigest>) -> Option<EncryptedDigestPb> {
    to_wire(native)
}

/// Validate an inbound digest, keeping holes in place.
///
/// # Errors
///
/// Returns [`ConversionError::Element`] with the index of the first item
/// whose conversation ID is not a valid URN.
pub fn digest_from_wire(
    wire: Option<EncryptedDigestPb>,
) -> Result<Option<EncryptedDigest>, ConversionError> {
    from_wire(wire).map_err(|e| {
        tracing::debug!(index = ?e.index(), error = %e, "rejected inbound digest");
        e
    })
}
