//! Strongly-typed ID wrappers for expenses and categories
//!
//! Ids are opaque strings. Newtypes keep expense and category ids from being
//! mixed up at compile time; the values themselves come from an
//! [`IdGenerator`](crate::services::IdGenerator).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ExpenseId);
define_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = CategoryId::new("7");
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.as_str(), "7");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ExpenseId::new("1700000000000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1700000000000\"");

        let back: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
