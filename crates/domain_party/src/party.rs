//! Party records
//!
//! A party is the counterparty of a commercial document: a customer, a
//! supplier or a lead. Its type-specific attributes live in
//! [`PartyDetails`]; the defaults applied to new documents live in
//! [`PartyDefaults`].
//!
//! # Copied fields
//!
//! Which attributes reach a party profile depends on the party type and is
//! spelled out in [`MasterFields`] and [`DefaultsPolicy`] rather than derived
//! from field-name conventions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CurrencyCode, CustomerGroupName, PartyName, PartyType, PriceListName};

/// A salesperson assigned to a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTeamAssignment {
    pub sales_person: String,
    #[serde(default)]
    pub sales_designation: Option<String>,
}

impl SalesTeamAssignment {
    pub fn new(sales_person: impl Into<String>) -> Self {
        Self {
            sales_person: sales_person.into(),
            sales_designation: None,
        }
    }

    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.sales_designation = Some(designation.into());
        self
    }
}

/// Customer-specific attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer_name: String,
    #[serde(default)]
    pub customer_group: Option<CustomerGroupName>,
    #[serde(default)]
    pub territory: Option<String>,
    /// Sales team in stored order
    #[serde(default)]
    pub sales_team: Vec<SalesTeamAssignment>,
}

/// Supplier-specific attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDetails {
    pub supplier_name: String,
    #[serde(default)]
    pub supplier_type: Option<String>,
}

/// Lead-specific attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDetails {
    pub lead_name: String,
}

/// Type-specific attributes of a party; the variant is the stored party type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "party_type")]
pub enum PartyDetails {
    Customer(CustomerDetails),
    Supplier(SupplierDetails),
    Lead(LeadDetails),
}

impl PartyDetails {
    /// Returns the stored party type
    pub fn party_type(&self) -> PartyType {
        match self {
            PartyDetails::Customer(_) => PartyType::Customer,
            PartyDetails::Supplier(_) => PartyType::Supplier,
            PartyDetails::Lead(_) => PartyType::Lead,
        }
    }

    /// Returns the customer group, for customers
    pub fn customer_group(&self) -> Option<&CustomerGroupName> {
        match self {
            PartyDetails::Customer(customer) => customer.customer_group.as_ref(),
            _ => None,
        }
    }

    /// Returns the sales team, for customers
    pub fn sales_team(&self) -> Option<&[SalesTeamAssignment]> {
        match self {
            PartyDetails::Customer(customer) => Some(&customer.sales_team),
            _ => None,
        }
    }

    /// Returns the master fields copied into a party profile
    pub fn master_fields(&self) -> MasterFields {
        match self {
            PartyDetails::Customer(customer) => MasterFields::Customer {
                customer_name: customer.customer_name.clone(),
                customer_group: customer.customer_group.clone(),
                territory: customer.territory.clone(),
            },
            PartyDetails::Supplier(supplier) => MasterFields::Supplier {
                supplier_name: supplier.supplier_name.clone(),
                supplier_type: supplier.supplier_type.clone(),
            },
            PartyDetails::Lead(lead) => MasterFields::Lead {
                lead_name: lead.lead_name.clone(),
            },
        }
    }
}

/// Master fields copied verbatim into a party profile
///
/// Leads copy only `lead_name`; they never take customer or supplier master
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterFields {
    Customer {
        customer_name: String,
        customer_group: Option<CustomerGroupName>,
        territory: Option<String>,
    },
    Supplier {
        supplier_name: String,
        supplier_type: Option<String>,
    },
    Lead {
        lead_name: String,
    },
}

impl MasterFields {
    /// Returns the fields as (key, value) pairs in output order
    pub fn entries(&self) -> Vec<(&'static str, Option<&str>)> {
        match self {
            MasterFields::Customer { customer_name, customer_group, territory } => vec![
                ("customer_name", Some(customer_name.as_str())),
                ("customer_group", customer_group.as_ref().map(CustomerGroupName::as_str)),
                ("territory", territory.as_deref()),
            ],
            MasterFields::Supplier { supplier_name, supplier_type } => vec![
                ("supplier_name", Some(supplier_name.as_str())),
                ("supplier_type", supplier_type.as_deref()),
            ],
            MasterFields::Lead { lead_name } => vec![("lead_name", Some(lead_name.as_str()))],
        }
    }
}

/// Defaults a party applies to new documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyDefaults {
    pub price_list: Option<PriceListName>,
    pub currency: Option<CurrencyCode>,
    pub taxes_and_charges: Option<String>,
    /// Customers only
    pub sales_partner: Option<String>,
    /// Customers only
    pub commission_rate: Option<Decimal>,
}

/// Defaults copied into a party profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub currency: Option<CurrencyCode>,
    pub taxes_and_charges: Option<String>,
    pub sales_partner: Option<String>,
    pub commission_rate: Option<Decimal>,
}

/// Which defaults a party type contributes to its profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultsPolicy {
    pub currency: bool,
    pub taxes_and_charges: bool,
    pub sales_partner: bool,
    pub commission_rate: bool,
}

impl DefaultsPolicy {
    const CUSTOMER: DefaultsPolicy = DefaultsPolicy {
        currency: true,
        taxes_and_charges: true,
        sales_partner: true,
        commission_rate: true,
    };

    const OTHER: DefaultsPolicy = DefaultsPolicy {
        currency: true,
        taxes_and_charges: true,
        sales_partner: false,
        commission_rate: false,
    };

    /// Returns the policy for a party type
    pub fn for_party_type(party_type: PartyType) -> Self {
        match party_type {
            PartyType::Customer => Self::CUSTOMER,
            PartyType::Supplier | PartyType::Lead => Self::OTHER,
        }
    }

    /// Copies the set defaults the policy allows
    ///
    /// Blank strings and a zero commission rate count as unset.
    pub fn apply(&self, defaults: &PartyDefaults) -> ProfileDefaults {
        fn text(allowed: bool, value: &Option<String>) -> Option<String> {
            value.clone().filter(|v| allowed && !v.trim().is_empty())
        }

        ProfileDefaults {
            currency: defaults
                .currency
                .clone()
                .filter(|c| self.currency && !c.as_str().trim().is_empty()),
            taxes_and_charges: text(self.taxes_and_charges, &defaults.taxes_and_charges),
            sales_partner: text(self.sales_partner, &defaults.sales_partner),
            commission_rate: defaults
                .commission_rate
                .filter(|rate| self.commission_rate && !rate.is_zero()),
        }
    }
}

/// A customer, supplier or lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: PartyName,
    pub details: PartyDetails,
    #[serde(default)]
    pub defaults: PartyDefaults,
    /// Payment terms in days
    #[serde(default)]
    pub credit_days: Option<u32>,
}

impl Party {
    pub fn new_customer(name: impl Into<PartyName>, details: CustomerDetails) -> Self {
        Self::new(name, PartyDetails::Customer(details))
    }

    pub fn new_supplier(name: impl Into<PartyName>, details: SupplierDetails) -> Self {
        Self::new(name, PartyDetails::Supplier(details))
    }

    pub fn new_lead(name: impl Into<PartyName>, details: LeadDetails) -> Self {
        Self::new(name, PartyDetails::Lead(details))
    }

    fn new(name: impl Into<PartyName>, details: PartyDetails) -> Self {
        Self {
            name: name.into(),
            details,
            defaults: PartyDefaults::default(),
            credit_days: None,
        }
    }

    /// Returns the type the party is stored as
    pub fn party_type(&self) -> PartyType {
        self.details.party_type()
    }

    pub fn with_defaults(mut self, defaults: PartyDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_credit_days(mut self, days: u32) -> Self {
        self.credit_days = Some(days);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn defaults() -> PartyDefaults {
        PartyDefaults {
            price_list: Some(PriceListName::new("Standard Selling")),
            currency: Some(CurrencyCode::new("EUR")),
            taxes_and_charges: Some("VAT 19%".to_string()),
            sales_partner: Some("Partner Co".to_string()),
            commission_rate: Some(dec!(2.5)),
        }
    }

    #[test]
    fn test_customer_policy_copies_everything() {
        let copied = DefaultsPolicy::for_party_type(PartyType::Customer).apply(&defaults());
        assert_eq!(copied.currency, Some(CurrencyCode::new("EUR")));
        assert_eq!(copied.sales_partner.as_deref(), Some("Partner Co"));
        assert_eq!(copied.commission_rate, Some(dec!(2.5)));
    }

    #[test]
    fn test_supplier_policy_skips_sales_fields() {
        let copied = DefaultsPolicy::for_party_type(PartyType::Supplier).apply(&defaults());
        assert_eq!(copied.taxes_and_charges.as_deref(), Some("VAT 19%"));
        assert_eq!(copied.sales_partner, None);
        assert_eq!(copied.commission_rate, None);
    }

    #[test]
    fn test_empty_values_are_not_copied() {
        let defaults = PartyDefaults {
            taxes_and_charges: Some("  ".to_string()),
            commission_rate: Some(Decimal::ZERO),
            ..PartyDefaults::default()
        };
        let copied = DefaultsPolicy::for_party_type(PartyType::Customer).apply(&defaults);
        assert_eq!(copied, ProfileDefaults::default());
    }

    #[test]
    fn test_master_fields_by_type() {
        let supplier = Party::new_supplier(
            "Globex",
            SupplierDetails {
                supplier_name: "Globex Corp".to_string(),
                supplier_type: Some("Raw Material".to_string()),
            },
        );
        assert_eq!(
            supplier.details.master_fields().entries(),
            vec![("supplier_name", Some("Globex Corp")), ("supplier_type", Some("Raw Material"))]
        );

        let lead = Party::new_lead("L-0001", LeadDetails { lead_name: "Initech".to_string() });
        assert_eq!(lead.party_type(), PartyType::Lead);
        assert_eq!(lead.details.master_fields().entries(), vec![("lead_name", Some("Initech"))]);
        assert!(lead.details.sales_team().is_none());
    }

    #[test]
    fn test_party_deserializes_with_tagged_details() {
        let json = r#"{
            "name": "Acme",
            "details": {"party_type": "Customer", "customer_name": "Acme Ltd", "customer_group": "Commercial"},
            "credit_days": 30
        }"#;
        let party: Party = serde_json::from_str(json).unwrap();
        assert_eq!(party.party_type(), PartyType::Customer);
        assert_eq!(party.details.customer_group(), Some(&CustomerGroupName::new("Commercial")));
        assert_eq!(party.credit_days, Some(30));
        assert!(party.details.sales_team().unwrap().is_empty());
    }
}
