//! Wire decoding limits.
//!
//! Bounds applied by the [`crate::codec`] helpers before an inbound buffer is
//! decoded and converted. Defaults suit a routing service; override via
//! environment variables or explicit construction.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default maximum encoded message size (4 MiB).
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 4 * 1024 * 1024;

/// Default maximum number of envelopes in a list.
pub const DEFAULT_MAX_LIST_ENTRIES: usize = 1000;

/// Default maximum number of digest positions (holes included).
pub const DEFAULT_MAX_DIGEST_ITEMS: usize = 1000;

/// Limits for decoding untrusted wire buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireLimits {
    /// Largest buffer accepted by any decode helper.
    pub max_message_bytes: usize,
    /// Largest envelope list accepted.
    pub max_list_entries: usize,
    /// Largest digest accepted.
    pub max_digest_items: usize,
}

impl Default for WireLimits {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            max_list_entries: DEFAULT_MAX_LIST_ENTRIES,
            max_digest_items: DEFAULT_MAX_DIGEST_ITEMS,
        }
    }
}

impl WireLimits {
    /// Load limits from environment variables.
    ///
    /// Variables:
    /// - `SM_MAX_MESSAGE_BYTES` (default: 4194304)
    /// - `SM_MAX_LIST_ENTRIES` (default: 1000)
    /// - `SM_MAX_DIGEST_ITEMS` (default: 1000)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but is not
    /// a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            max_message_bytes: env_limit(
                &lookup,
                "SM_MAX_MESSAGE_BYTES",
                DEFAULT_MAX_MESSAGE_BYTES,
            )?,
            max_list_entries: env_limit(&lookup, "SM_MAX_LIST_ENTRIES", DEFAULT_MAX_LIST_ENTRIES)?,
            max_digest_items: env_limit(&lookup, "SM_MAX_DIGEST_ITEMS", DEFAULT_MAX_DIGEST_ITEMS)?,
        })
    }
}

fn env_limit(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: raw,
        }),
    }
}
