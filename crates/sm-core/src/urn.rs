//! # Uniform Resource Names
//!
//! [`Urn`] is the identifier for every addressable entity in the messaging
//! system (users, devices, conversations, groups). Its canonical form is
//! `urn:sm:<entity-type>:<entity-id>`.
//!
//! ## Invariant
//!
//! A `Urn` is either the zero value (`Urn::default()`, all components empty)
//! or fully valid. Components are private; the only construction paths are
//! [`Urn::new`], [`Urn::parse`] and [`Urn::decode_compat`], all of which
//! validate. A partially populated identifier cannot be expressed.
//!
//! ## JSON
//!
//! A valid `Urn` serializes as its canonical string and the zero value as
//! `null`, so an uninitialized identifier never re-parses as a
//! valid-looking empty one. Deserialization also accepts bare legacy user IDs
//! (see [`Urn::decode_compat`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UrnError;

/// The URN scheme, always the first segment.
pub const SCHEME: &str = "urn";

/// The secure-messaging namespace, always the second segment.
pub const NAMESPACE: &str = "sm";

/// Number of `:`-separated segments in a canonical URN.
pub const PARTS: usize = 4;

/// Segment delimiter.
pub const DELIMITER: char = ':';

/// Entity type for users. Legacy bare identifiers decode to this type.
pub const ENTITY_TYPE_USER: &str = "user";

/// Entity type for devices.
pub const ENTITY_TYPE_DEVICE: &str = "device";

/// Entity type for conversations.
pub const ENTITY_TYPE_CONVERSATION: &str = "convo";

/// Entity type for groups.
pub const ENTITY_TYPE_GROUP: &str = "group";

/// A parsed, validated Uniform Resource Name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Urn {
    entity_type: String,
    entity_id: String,
}

impl Urn {
    /// Create a URN in the secure-messaging namespace.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::EmptyEntityType`] or [`UrnError::EmptyEntityId`]
    /// if either component is empty.
    pub fn new(
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Result<Self, UrnError> {
        let entity_type = entity_type.into();
        let entity_id = entity_id.into();

        if entity_type.is_empty() {
            return Err(UrnError::EmptyEntityType);
        }
        if entity_id.is_empty() {
            return Err(UrnError::EmptyEntityId);
        }

        Ok(Self {
            entity_type,
            entity_id,
        })
    }

    /// Create a user URN (`urn:sm:user:<id>`).
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::EmptyEntityId`] if `entity_id` is empty.
    pub fn user(entity_id: impl Into<String>) -> Result<Self, UrnError> {
        Self::new(ENTITY_TYPE_USER, entity_id)
    }

    /// Parse a canonical `urn:sm:<type>:<id>` string.
    ///
    /// The namespace is a single fixed value and is checked explicitly.
    /// Component non-emptiness is delegated to [`Urn::new`].
    ///
    /// # Errors
    ///
    /// Returns a [`UrnError`] naming the first structural rule the input
    /// breaks.
    pub fn parse(s: &str) -> Result<Self, UrnError> {
        let parts: Vec<&str> = s.split(DELIMITER).collect();
        if parts.len() != PARTS {
            return Err(UrnError::PartCount {
                expected: PARTS,
                actual: parts.len(),
            });
        }

        if parts[0] != SCHEME {
            return Err(UrnError::InvalidScheme(parts[0].to_string()));
        }
        if parts[1] != NAMESPACE {
            return Err(UrnError::InvalidNamespace(parts[1].to_string()));
        }

        Self::new(parts[2], parts[3])
    }

    /// Decode an identifier that may be either a full URN or a legacy bare
    /// user ID.
    ///
    /// - `"urn:..."` must parse strictly; a malformed URN is never
    ///   reinterpreted as a legacy ID.
    /// - Any other non-empty string becomes `urn:sm:user:<s>`.
    /// - The empty string is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::Empty`] for empty input, or the parse error for a
    /// malformed URN.
    pub fn decode_compat(s: &str) -> Result<Self, UrnError> {
        if s.starts_with(SCHEME_PREFIX) {
            return Self::parse(s);
        }
        if s.is_empty() {
            return Err(UrnError::Empty);
        }
        Self::user(s)
    }

    /// True only for the uninitialized value.
    pub fn is_zero(&self) -> bool {
        self.entity_type.is_empty() && self.entity_id.is_empty()
    }

    /// The scheme segment, or `""` for the zero value.
    pub fn scheme(&self) -> &str {
        if self.is_zero() {
            ""
        } else {
            SCHEME
        }
    }

    /// The namespace segment, or `""` for the zero value.
    pub fn namespace(&self) -> &str {
        if self.is_zero() {
            ""
        } else {
            NAMESPACE
        }
    }

    /// The entity type (e.g. `"user"`).
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The entity identifier.
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }
}

const SCHEME_PREFIX: &str = "urn:";

/// Canonical `urn:sm:<type>:<id>` form. The zero value renders as `""`.
impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return Ok(());
        }
        write!(
            f,
            "{SCHEME}{DELIMITER}{NAMESPACE}{DELIMITER}{}{DELIMITER}{}",
            self.entity_type, self.entity_id
        )
    }
}

impl FromStr for Urn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = UrnError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_zero() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(&self.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::default()),
            Some(raw) => Self::decode_compat(&raw).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- construction --

    #[test]
    fn new_valid() {
        let u = Urn::new("user", "user-123").unwrap();
        assert_eq!(u.to_string(), "urn:sm:user:user-123");
        assert_eq!(u.scheme(), "urn");
        assert_eq!(u.namespace(), "sm");
        assert_eq!(u.entity_type(), "user");
        assert_eq!(u.entity_id(), "user-123");
        assert!(!u.is_zero());
    }

    #[test]
    fn new_rejects_empty_components() {
        assert_eq!(Urn::new("", "user-123"), Err(UrnError::EmptyEntityType));
        assert_eq!(Urn::new("user", ""), Err(UrnError::EmptyEntityId));
        assert_eq!(Urn::new("", ""), Err(UrnError::EmptyEntityType));
    }

    #[test]
    fn user_helper() {
        assert_eq!(
            Urn::user("alice").unwrap(),
            Urn::new("user", "alice").unwrap()
        );
        assert!(Urn::user("").is_err());
    }

    // -- parse --

    #[test]
    fn parse_valid() {
        let u = Urn::parse("urn:sm:device:uuid-abc-123").unwrap();
        assert_eq!(u.entity_type(), ENTITY_TYPE_DEVICE);
        assert_eq!(u.entity_id(), "uuid-abc-123");
        assert_eq!(u.to_string(), "urn:sm:device:uuid-abc-123");
    }

    #[test]
    fn parse_rejects_invalid() {
        let cases = [
            (
                "",
                UrnError::PartCount {
                    expected: 4,
                    actual: 1,
                },
            ),
            (
                "not-a-valid-urn",
                UrnError::PartCount {
                    expected: 4,
                    actual: 1,
                },
            ),
            (
                "urn:sm:user",
                UrnError::PartCount {
                    expected: 4,
                    actual: 3,
                },
            ),
            (
                "urn:sm:user:id:extra",
                UrnError::PartCount {
                    expected: 4,
                    actual: 5,
                },
            ),
            (
                "foo:sm:user:user-123",
                UrnError::InvalidScheme("foo".to_string()),
            ),
            (
                "urn:xx:user:user-123",
                UrnError::InvalidNamespace("xx".to_string()),
            ),
            (
                "urn::user:user-123",
                UrnError::InvalidNamespace(String::new()),
            ),
            ("urn:sm::user-123", UrnError::EmptyEntityType),
            ("urn:sm:user:", UrnError::EmptyEntityId),
        ];
        for (input, expected) in cases {
            assert_eq!(Urn::parse(input), Err(expected), "input: {input:?}");
        }
    }

    #[test]
    fn from_str_and_try_from_match_parse() {
        let a: Urn = "urn:sm:group:g-1".parse().unwrap();
        let b = Urn::try_from("urn:sm:group:g-1").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Urn::new(ENTITY_TYPE_GROUP, "g-1").unwrap());
        assert_eq!(
            Urn::new(ENTITY_TYPE_CONVERSATION, "c-1").unwrap().to_string(),
            "urn:sm:convo:c-1"
        );
        assert!("urn:sm:group".parse::<Urn>().is_err());
    }

    // -- zero value --

    #[test]
    fn zero_value() {
        let zero = Urn::default();
        assert!(zero.is_zero());
        assert_eq!(zero.scheme(), "");
        assert_eq!(zero.namespace(), "");
        assert_eq!(zero.to_string(), "");
    }

    // -- compat decoding --

    #[test]
    fn decode_compat_branches() {
        assert_eq!(
            Urn::decode_compat("urn:sm:user:user-123").unwrap(),
            Urn::new("user", "user-123").unwrap()
        );
        assert_eq!(
            Urn::decode_compat("legacy-user-456").unwrap(),
            Urn::new("user", "legacy-user-456").unwrap()
        );
        assert_eq!(Urn::decode_compat(""), Err(UrnError::Empty));
    }

    #[test]
    fn decode_compat_never_reinterprets_malformed_urn() {
        assert_eq!(
            Urn::decode_compat("urn:sm:user"),
            Err(UrnError::PartCount {
                expected: 4,
                actual: 3
            })
        );
        assert!(Urn::decode_compat("urn:other:user:x").is_err());
    }

    // -- JSON --

    #[test]
    fn json_serialize_valid_and_zero() {
        let u = Urn::new("user", "user-123").unwrap();
        assert_eq!(serde_json::to_string(&u).unwrap(), r#""urn:sm:user:user-123""#);
        assert_eq!(serde_json::to_string(&Urn::default()).unwrap(), "null");
    }

    #[test]
    fn json_deserialize_urn_and_legacy() {
        let u: Urn = serde_json::from_str(r#""urn:sm:user:user-123""#).unwrap();
        assert_eq!(u.entity_type(), "user");
        assert_eq!(u.entity_id(), "user-123");

        let legacy: Urn = serde_json::from_str(r#""legacy-user-456""#).unwrap();
        assert_eq!(legacy, Urn::new("user", "legacy-user-456").unwrap());
    }

    #[test]
    fn json_deserialize_null_is_zero() {
        let u: Urn = serde_json::from_str("null").unwrap();
        assert!(u.is_zero());
    }

    #[test]
    fn json_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Urn>(r#""""#).is_err());
        assert!(serde_json::from_str::<Urn>(r#""urn:sm:user""#).is_err());
        assert!(serde_json::from_str::<Urn>("123").is_err());
        assert!(serde_json::from_str::<Urn>(r#"{"id":"x"}"#).is_err());
    }

    #[test]
    fn legacy_id_with_delimiter_does_not_round_trip() {
        // Legacy IDs are only checked for emptiness, so a colon survives
        // decoding but yields a five-segment canonical form.
        let legacy: Urn = serde_json::from_str(r#""team:alice""#).unwrap();
        assert_eq!(legacy.entity_type(), ENTITY_TYPE_USER);
        assert_eq!(legacy.entity_id(), "team:alice");

        let json = serde_json::to_string(&legacy).unwrap();
        assert_eq!(json, r#""urn:sm:user:team:alice""#);
        assert!(serde_json::from_str::<Urn>(&json).is_err());
        assert_eq!(
            Urn::decode_compat(&legacy.to_string()),
            Err(UrnError::PartCount {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn serializes_like_optional_string() {
        let u = Urn::new(ENTITY_TYPE_DEVICE, "d-1").unwrap();
        assert_eq!(
            serde_json::to_value(&u).unwrap(),
            serde_json::to_value(Some("urn:sm:device:d-1")).unwrap()
        );
        assert_eq!(
            serde_json::to_value(Urn::default()).unwrap(),
            serde_json::to_value(None::<String>).unwrap()
        );
    }

    #[test]
    fn json_round_trip_inside_struct() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Message {
            sender: Urn,
            group: Urn,
        }

        let msg = Message {
            sender: Urn::new("user", "alice").unwrap(),
            group: Urn::default(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"sender":"urn:sm:user:alice","group":null}"#);
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }
}
