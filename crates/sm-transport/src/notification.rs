//! Push-notification requests.
//!
//! Only the recipient is validated. Device tokens, display content and the
//! data payload are opaque here and are copied verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sm_core::Urn;

use crate::convert::{from_wire, required_id, to_wire};
use crate::error::{ConversionError, IdField};
use crate::wire::{DeviceTokenPb, NotificationContentPb, NotificationRequestPb};

/// A push token registered by one of the recipient's devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceToken {
    pub token: String,
    /// Push provider, e.g. `"apns"` or `"fcm"`.
    pub platform: String,
}

/// What the device shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub recipient_id: Urn,
    pub tokens: Vec<DeviceToken>,
    pub content: NotificationContent,
    #[serde(default)]
    pub data_payload: HashMap<String, String>,
}

impl From<&DeviceToken> for DeviceTokenPb {
    fn from(native: &DeviceToken) -> Self {
        Self {
            token: native.token.clone(),
            platform: native.platform.clone(),
        }
    }
}

impl From<DeviceTokenPb> for DeviceToken {
    fn from(wire: DeviceTokenPb) -> Self {
        Self {
            token: wire.token,
            platform: wire.platform,
        }
    }
}

impl From<&NotificationContent> for NotificationContentPb {
    fn from(native: &NotificationContent) -> Self {
        Self {
            title: native.title.clone(),
            body: native.body.clone(),
            sound: native.sound.clone(),
        }
    }
}

impl From<NotificationContentPb> for NotificationContent {
    fn from(wire: NotificationContentPb) -> Self {
        Self {
            title: wire.title,
            body: wire.body,
            sound: wire.sound,
        }
    }
}

impl From<&NotificationRequest> for NotificationRequestPb {
    fn from(native: &NotificationRequest) -> Self {
        Self {
            recipient_id: native.recipient_id.to_string(),
            tokens: native.tokens.iter().map(DeviceTokenPb::from).collect(),
            content: Some(NotificationContentPb::from(&native.content)),
            data_payload: native.data_payload.clone(),
        }
    }
}

impl TryFrom<NotificationRequestPb> for NotificationRequest {
    type Error = ConversionError;

    fn try_from(wire: NotificationRequestPb) -> Result<Self, Self::Error> {
        Ok(Self {
            recipient_id: required_id(&wire.recipient_id, IdField::Recipient)?,
            tokens: wire.tokens.into_iter().map(DeviceToken::from).collect(),
            content: wire.content.map(NotificationContent::from).unwrap_or_default(),
            data_payload: wire.data_payload,
        })
    }
}

/// Convert a notification request for the dispatch service.
pub fn notification_to_wire(native: Option<&NotificationRequest>) -> Option<NotificationRequestPb> {
    to_wire(native)
}

/// Validate an inbound notification request.
///
/// # Errors
///
/// Returns [`ConversionError::Field`] for [`IdField::Recipient`] if the
/// recipient is not a valid URN.
pub fn notification_from_wire(
    wire: Option<NotificationRequestPb>,
) -> Result<Option<NotificationRequest>, ConversionError> {
    from_wire(wire).map_err(|e| {
        tracing::debug!(error = %e, "rejected inbound notification request");
        e
    })
}
