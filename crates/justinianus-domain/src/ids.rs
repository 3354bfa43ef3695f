//! Identifier newtypes
//!
//! Every entity in a case is keyed by a UUIDv7. The newtypes keep node,
//! edge, deadline and case keys from being mixed up at call sites.

use crate::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u128);

        impl $name {
            /// Generate a new UUIDv7-based identifier
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7().as_u128())
            }

            /// Wrap a raw u128 value
            pub fn from_value(value: u128) -> Self {
                Self(value)
            }

            /// Parse from a hyphenated UUID string
            pub fn from_string(s: &str) -> Result<Self, DomainError> {
                uuid::Uuid::parse_str(s)
                    .map(|u| Self(u.as_u128()))
                    .map_err(|e| DomainError::InvalidId {
                        value: s.to_string(),
                        reason: e.to_string(),
                    })
            }

            /// Get the raw u128 value
            pub fn value(&self) -> u128 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", uuid::Uuid::from_u128(self.0))
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::from_string(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a legal case (the scope of one evidence graph)
    CaseId
);

uuid_id!(
    /// Identifier of an evidence-graph node
    NodeId
);

uuid_id!(
    /// Identifier of an evidence-graph edge
    EdgeId
);

uuid_id!(
    /// Identifier of a procedural deadline
    DeadlineId
);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Ordering of ids follows the underlying value
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            prop_assert_eq!(NodeId::from_value(a) < NodeId::from_value(b), a < b);
        }

        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = EdgeId::from_value(value);
            prop_assert_eq!(EdgeId::from_string(&id.to_string()).unwrap(), id);
        }
    }
}
