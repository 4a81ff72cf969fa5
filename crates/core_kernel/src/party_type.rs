//! Party types and their field naming table
//!
//! Several output keys of a party profile depend on the party type
//! (`debit_to` vs `credit_to`, `customer_address` vs `supplier_address`).
//! They are looked up from a static table indexed by [`PartyType`] so that no
//! key is ever produced by string concatenation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The kind of counterparty a document is prepared for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartyType {
    /// A buyer; posts against a receivable account
    #[default]
    Customer,
    /// A vendor; posts against a payable account
    Supplier,
    /// A prospective customer
    Lead,
}

/// Output keys whose names depend on the party type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyFieldNames {
    /// Key holding the party identity
    pub identity: &'static str,
    /// Key holding the linked ledger account
    pub account: &'static str,
    /// Key holding the billing address name
    pub billing_address: &'static str,
    /// Key holding the resolved price list
    pub price_list: &'static str,
}

const CUSTOMER_FIELDS: PartyFieldNames = PartyFieldNames {
    identity: "customer",
    account: "debit_to",
    billing_address: "customer_address",
    price_list: "selling_price_list",
};

const SUPPLIER_FIELDS: PartyFieldNames = PartyFieldNames {
    identity: "supplier",
    account: "credit_to",
    billing_address: "supplier_address",
    price_list: "buying_price_list",
};

// Leads are billed through the customer address key.
const LEAD_FIELDS: PartyFieldNames = PartyFieldNames {
    identity: "lead",
    account: "credit_to",
    billing_address: "customer_address",
    price_list: "buying_price_list",
};

impl PartyType {
    /// All party types, in declaration order
    pub const ALL: [PartyType; 3] = [PartyType::Customer, PartyType::Supplier, PartyType::Lead];

    /// Returns the display name of the party type
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyType::Customer => "Customer",
            PartyType::Supplier => "Supplier",
            PartyType::Lead => "Lead",
        }
    }

    /// Returns the name of the link field that ties addresses and contacts
    /// to a party of this type
    pub fn link_field(&self) -> &'static str {
        self.field_names().identity
    }

    /// Returns the type-dependent output key names
    pub fn field_names(&self) -> &'static PartyFieldNames {
        match self {
            PartyType::Customer => &CUSTOMER_FIELDS,
            PartyType::Supplier => &SUPPLIER_FIELDS,
            PartyType::Lead => &LEAD_FIELDS,
        }
    }

    /// Returns true if documents for this party type carry a shipping address
    pub fn has_shipping_address(&self) -> bool {
        matches!(self, PartyType::Customer | PartyType::Lead)
    }

    /// Returns true if the party's ledger account sits under the receivables group
    pub fn is_receivable(&self) -> bool {
        matches!(self, PartyType::Customer)
    }
}

impl fmt::Display for PartyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartyType::ALL
            .into_iter()
            .find(|party_type| party_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::validation(format!("Unknown party type: {}", s)))
    }
}
