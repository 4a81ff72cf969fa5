//! Strongly-typed identifiers for domain records
//!
//! Parties, accounts, companies and the other records consulted during
//! resolution are keyed by human-readable names. Newtype wrappers around
//! `String` keep a party name from being passed where an account name is
//! expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_name {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a name from any string-like value
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Creates a name unless the value is empty or whitespace only
            ///
            /// Callers pass "no value" as an empty string as often as they
            /// omit it, so both collapse to `None` here.
            pub fn non_blank(name: impl Into<String>) -> Option<Self> {
                let name = name.into();
                if name.trim().is_empty() {
                    None
                } else {
                    Some(Self(name))
                }
            }

            /// Returns the name as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the record type this name identifies
            pub fn entity() -> &'static str {
                $entity
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

// Party domain
define_name!(PartyName, "Party");
define_name!(CustomerGroupName, "Customer Group");
define_name!(AddressName, "Address");
define_name!(ContactName, "Contact");

// Ledger domain
define_name!(AccountName, "Account");
define_name!(CompanyName, "Company");

// Pricing
define_name!(PriceListName, "Price List");
define_name!(CurrencyCode, "Currency");

// Actors
define_name!(UserId, "User");

/// Correlation identifier tying together the log events of one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new_v7()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "REQ-{}", self.0)
    }
}
