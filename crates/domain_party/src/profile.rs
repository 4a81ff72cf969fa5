//! The derived party profile
//!
//! A profile is built fresh for every request and never stored. It
//! serializes to a flat mapping whose key names depend on the party type:
//!
//! | key                | Customer           | Supplier           | Lead               |
//! |--------------------|--------------------|--------------------|--------------------|
//! | identity           | `customer`         | `supplier`         | `lead`             |
//! | account            | `debit_to`         | `credit_to`        | `credit_to`        |
//! | billing address    | `customer_address` | `supplier_address` | `customer_address` |
//! | price list         | `selling_price_list` | `buying_price_list` | `buying_price_list` |
//!
//! The price list key follows the stored type of the party record.

use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use core_kernel::{AccountName, PartyName, PartyType};

use crate::contact::ContactDetails;
use crate::party::{MasterFields, ProfileDefaults, SalesTeamAssignment};
use crate::price_list::ResolvedPriceList;
use crate::selector::AddressSelection;

/// Posting account and due date, set when the request had a posting date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountLinkage {
    pub account: Option<AccountName>,
    pub due_date: Option<NaiveDate>,
}

/// Transaction-ready defaults for one party
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPartyProfile {
    /// Party type the request was made for
    pub party_type: PartyType,
    pub party: PartyName,
    pub account_linkage: Option<AccountLinkage>,
    pub addresses: AddressSelection,
    pub contact: ContactDetails,
    pub master: MasterFields,
    pub defaults: ProfileDefaults,
    pub price_list: Option<ResolvedPriceList>,
    /// Customers only
    pub sales_team: Option<Vec<SalesTeamAssignment>>,
}

impl DerivedPartyProfile {
    /// Output key holding the party identity
    pub fn identity_field(&self) -> &'static str {
        self.party_type.field_names().identity
    }

    /// Output key holding the posting account
    pub fn account_field(&self) -> &'static str {
        self.party_type.field_names().account
    }

    /// Output key holding the billing address name
    pub fn billing_address_field(&self) -> &'static str {
        self.party_type.field_names().billing_address
    }

    pub fn account(&self) -> Option<&AccountName> {
        self.account_linkage.as_ref().and_then(|linkage| linkage.account.as_ref())
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.account_linkage.as_ref().and_then(|linkage| linkage.due_date)
    }
}

impl Serialize for DerivedPartyProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry(self.identity_field(), &self.party)?;
        if let Some(linkage) = &self.account_linkage {
            map.serialize_entry(self.account_field(), &linkage.account)?;
            map.serialize_entry("due_date", &linkage.due_date)?;
        }

        map.serialize_entry(self.billing_address_field(), &self.addresses.billing.name)?;
        map.serialize_entry("address_display", &self.addresses.billing.display)?;
        if let Some(shipping) = &self.addresses.shipping {
            if let Some(name) = &shipping.name {
                map.serialize_entry("shipping_address_name", name)?;
            }
            map.serialize_entry("shipping_address", &shipping.display)?;
        }

        for (key, value) in self.contact.entries() {
            map.serialize_entry(key, &value)?;
        }

        for (key, value) in self.master.entries() {
            if let Some(value) = value {
                map.serialize_entry(key, value)?;
            }
        }

        if let Some(currency) = &self.defaults.currency {
            map.serialize_entry("currency", currency)?;
        }
        if let Some(taxes) = &self.defaults.taxes_and_charges {
            map.serialize_entry("taxes_and_charges", taxes)?;
        }
        if let Some(partner) = &self.defaults.sales_partner {
            map.serialize_entry("sales_partner", partner)?;
        }
        if let Some(rate) = &self.defaults.commission_rate {
            map.serialize_entry("commission_rate", rate)?;
        }

        if let Some(price_list) = &self.price_list {
            map.serialize_entry(price_list.field_name(), &price_list.name)?;
            if let Some(currency) = &price_list.currency {
                map.serialize_entry("price_list_currency", currency)?;
            }
        }

        if let Some(sales_team) = &self.sales_team {
            map.serialize_entry("sales_team", sales_team)?;
        }

        map.end()
    }
}
