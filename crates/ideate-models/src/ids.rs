//! Type-safe ID wrappers for Ideate.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtypes with common functionality.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random ID.
            pub fn new() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4()))
            }

            /// Creates an ID from an existing string (for deserialization/testing).
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(OpportunityId, "opp");
define_id!(IdeaId, "idea");
define_id!(MessageId, "msg");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opportunity_id_prefix() {
        let id = OpportunityId::new();
        assert!(id.as_str().starts_with("opp-"));
    }

    #[test]
    fn test_idea_id_prefix() {
        let id = IdeaId::new();
        assert!(id.as_str().starts_with("idea-"));
    }

    #[test]
    fn test_id_from_string() {
        let id = OpportunityId::from_string("opp-custom-123");
        assert_eq!(id.as_str(), "opp-custom-123");
    }

    #[test]
    fn test_id_serialization() {
        let id = OpportunityId::from_string("opp-test");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"opp-test\"");

        let parsed: OpportunityId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display() {
        let id = IdeaId::from_string("idea-123");
        assert_eq!(format!("{}", id), "idea-123");
    }

    #[test]
    fn test_id_as_ref() {
        let id = MessageId::from_string("msg-123");
        assert_eq!(id.as_ref(), "msg-123");

        fn takes_str(s: impl AsRef<str>) -> String {
            s.as_ref().to_string()
        }
        assert_eq!(takes_str(id), "msg-123");
    }
}
