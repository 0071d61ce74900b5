//! # Wire Schema
//!
//! Protobuf rendering of the transport schema. These are the types that
//! cross the network; identifiers are plain strings and payloads are opaque
//! bytes. Nothing here validates anything; see the sibling modules for the
//! conversions that do.
//!
//! ```text
//! SecureEnvelopeListPb
//!     +-- envelopes: [SecureEnvelopePb]
//!
//! EncryptedDigestPb
//!     +-- items: [DigestEntryPb]
//!           +-- item: EncryptedDigestItemPb (absent = hole)
//!
//! NotificationRequestPb
//!     +-- recipient_id, tokens: [DeviceTokenPb], content: NotificationContentPb
//!     +-- data_payload: map<string, string>
//! ```
//!
//! Protobuf `repeated` message fields cannot carry null entries, so a digest
//! hole is encoded as a [`DigestEntryPb`] with no item. This keeps positions
//! stable through an actual encode/decode, not just in memory.

use std::collections::HashMap;

use prost::Message;

/// A single end-to-end encrypted message.
#[derive(Clone, PartialEq, Message)]
pub struct SecureEnvelopePb {
    #[prost(string, tag = "1")]
    pub message_id: String,
    #[prost(string, tag = "2")]
    pub sender_id: String,
    #[prost(string, tag = "3")]
    pub recipient_id: String,
    #[prost(string, tag = "4")]
    pub group_id: String,
    #[prost(string, tag = "5")]
    pub conversation_id: String,
    #[prost(bytes = "vec", tag = "6")]
    pub encrypted_data: Vec<u8>,
    #[prost(bytes = "vec", tag = "7")]
    pub encrypted_symmetric_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "8")]
    pub signature: Vec<u8>,
    #[prost(bytes = "vec", tag = "9")]
    pub encrypted_snippet: Vec<u8>,
}

/// An ordered batch of envelopes.
#[derive(Clone, PartialEq, Message)]
pub struct SecureEnvelopeListPb {
    #[prost(message, repeated, tag = "1")]
    pub envelopes: Vec<SecureEnvelopePb>,
}

/// Per-conversation encrypted summary.
#[derive(Clone, PartialEq, Message)]
pub struct EncryptedDigestItemPb {
    #[prost(string, tag = "1")]
    pub conversation_id: String,
    #[prost(bytes = "vec", tag = "2")]
    pub encrypted_snippet: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub encrypted_symmetric_key: Vec<u8>,
}

/// One position in a digest. `item == None` is a hole.
#[derive(Clone, PartialEq, Message)]
pub struct DigestEntryPb {
    #[prost(message, optional, tag = "1")]
    pub item: Option<EncryptedDigestItemPb>,
}

/// Ordered, index-aligned digest.
#[derive(Clone, PartialEq, Message)]
pub struct EncryptedDigestPb {
    #[prost(message, repeated, tag = "1")]
    pub items: Vec<DigestEntryPb>,
}

#[derive(Clone, PartialEq, Message)]
pub struct DeviceTokenPb {
    #[prost(string, tag = "1")]
    pub token: String,
    #[prost(string, tag = "2")]
    pub platform: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct NotificationContentPb {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub body: String,
    #[prost(string, tag = "3")]
    pub sound: String,
}

/// Push-notification request handed to the dispatch service.
#[derive(Clone, PartialEq, Message)]
pub struct NotificationRequestPb {
    #[prost(string, tag = "1")]
    pub recipient_id: String,
    #[prost(message, repeated, tag = "2")]
    pub tokens: Vec<DeviceTokenPb>,
    #[prost(message, optional, tag = "3")]
    pub content: Option<NotificationContentPb>,
    #[prost(map = "string, string", tag = "4")]
    pub data_payload: HashMap<String, String>,
}
