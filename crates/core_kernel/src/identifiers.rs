//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around UUIDs prevent accidental mixing of identifier
//! types (a MemberId never silently stands in for a ServiceId).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        // Wire format is the bare UUID, but deserialization also accepts
        // the prefixed rendering so an id copied from a log line or error
        // message works in a path or query.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

// Member ledger identifiers
define_id!(MemberId, "MBR");

// Service roster identifiers
define_id!(ServiceId, "SVC");
define_id!(SubscriptionId, "SUB");

// Billing identifiers
define_id!(TransactionId, "TXN");
define_id!(ParticipantId, "PTC");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_display() {
        let id = MemberId::new();
        assert!(id.to_string().starts_with("MBR-"));
    }

    #[test]
    fn test_id_parsing_accepts_prefixed_and_bare() {
        let original = TransactionId::new_v7();

        let parsed: TransactionId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);

        let bare: TransactionId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, bare);
    }

    #[test]
    fn test_serde_accepts_prefixed_and_bare_ids() {
        let id = TransactionId::new_v7();
        let bare_json = serde_json::Value::String(id.as_uuid().to_string());
        let prefixed_json = serde_json::Value::String(id.to_string());

        let bare: TransactionId = serde_json::from_value(bare_json.clone()).unwrap();
        let prefixed: TransactionId = serde_json::from_value(prefixed_json).unwrap();
        assert_eq!(bare, id);
        assert_eq!(prefixed, id);

        // serialization stays the bare uuid
        assert_eq!(serde_json::to_value(id).unwrap(), bare_json);
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        let first = ParticipantId::new_v7();
        let second = ParticipantId::new_v7();
        assert!(first <= second);
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id = ServiceId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }
}
