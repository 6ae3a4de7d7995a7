//! Identifier newtypes for goals and categories
//!
//! Budgets hand us plain string identifiers. New ones are UUID v4 strings,
//! but any non-empty string loaded from a snapshot is accepted as is.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Characters of the identifier shown after the display prefix
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// The identifier exactly as stored
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether `s` names this identifier, either in full or in its
            /// short display form
            pub fn matches(&self, s: &str) -> bool {
                let s = s.trim();
                !s.is_empty() && (self.0 == s || self.to_string() == s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let short: String = self.0.chars().take(SHORT_LEN).collect();
                write!(f, "{}{}", $display_prefix, short)
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
    };
}

define_id!(GoalId, "goal-");
define_id!(CategoryId, "cat-");
