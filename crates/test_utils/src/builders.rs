//! Test Data Builders
//!
//! Provides builder patterns for constructing test records with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::{Duration, TimeZone, Utc};
use core_kernel::{CurrencyCode, CustomerGroupName, PartyType, PriceListName};
use domain_party::{
    Address, Contact, CustomerDetails, LeadDetails, Party, PartyDefaults, PartyDetails, PartyLink,
    SalesTeamAssignment, SupplierDetails,
};
use rust_decimal::Decimal;

/// Builder for constructing test parties
pub struct PartyBuilder {
    name: String,
    details: PartyDetails,
    defaults: PartyDefaults,
    credit_days: Option<u32>,
}

impl PartyBuilder {
    /// Starts a customer named `name` in group "Commercial"
    pub fn customer(name: &str) -> Self {
        Self::new(
            name,
            PartyDetails::Customer(CustomerDetails {
                customer_name: format!("{} Ltd", name),
                customer_group: Some(CustomerGroupName::new("Commercial")),
                territory: Some("Domestic".to_string()),
                sales_team: vec![],
            }),
        )
    }

    /// Starts a supplier named `name`
    pub fn supplier(name: &str) -> Self {
        Self::new(
            name,
            PartyDetails::Supplier(SupplierDetails {
                supplier_name: format!("{} Corp", name),
                supplier_type: Some("Services".to_string()),
            }),
        )
    }

    /// Starts a lead named `name`
    pub fn lead(name: &str) -> Self {
        Self::new(
            name,
            PartyDetails::Lead(LeadDetails {
                lead_name: format!("{} Prospect", name),
            }),
        )
    }

    fn new(name: &str, details: PartyDetails) -> Self {
        Self {
            name: name.to_string(),
            details,
            defaults: PartyDefaults::default(),
            credit_days: None,
        }
    }

    /// Sets or clears the customer group (customers only)
    pub fn with_customer_group(mut self, group: Option<&str>) -> Self {
        if let PartyDetails::Customer(customer) = &mut self.details {
            customer.customer_group = group.map(CustomerGroupName::new);
        }
        self
    }

    /// Appends a sales team member (customers only)
    pub fn with_sales_person(mut self, person: &str, designation: &str) -> Self {
        if let PartyDetails::Customer(customer) = &mut self.details {
            customer
                .sales_team
                .push(SalesTeamAssignment::new(person).with_designation(designation));
        }
        self
    }

    pub fn with_price_list(mut self, price_list: &str) -> Self {
        self.defaults.price_list = Some(PriceListName::new(price_list));
        self
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.defaults.currency = Some(CurrencyCode::new(currency));
        self
    }

    pub fn with_taxes(mut self, template: &str) -> Self {
        self.defaults.taxes_and_charges = Some(template.to_string());
        self
    }

    pub fn with_sales_partner(mut self, partner: &str, commission_rate: Decimal) -> Self {
        self.defaults.sales_partner = Some(partner.to_string());
        self.defaults.commission_rate = Some(commission_rate);
        self
    }

    pub fn with_credit_days(mut self, days: u32) -> Self {
        self.credit_days = Some(days);
        self
    }

    /// Builds the party
    pub fn build(self) -> Party {
        let party = match self.details {
            PartyDetails::Customer(details) => Party::new_customer(self.name, details),
            PartyDetails::Supplier(details) => Party::new_supplier(self.name, details),
            PartyDetails::Lead(details) => Party::new_lead(self.name, details),
        };
        let party = party.with_defaults(self.defaults);
        match self.credit_days {
            Some(days) => party.with_credit_days(days),
            None => party,
        }
    }
}

/// Reference instant all builder timestamps are relative to
fn reference_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Builder for constructing test addresses
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    /// Starts an unflagged address named `name` linked to the party
    pub fn new(name: &str, party_type: PartyType, party: &str) -> Self {
        let mut address = Address::new(
            name,
            PartyLink::new(party_type, party),
            format!("{} Street 1", party),
            "Springfield",
            "United States",
        );
        address.modified = reference_time();
        Self { address }
    }

    pub fn primary(mut self) -> Self {
        self.address.is_primary_address = true;
        self
    }

    pub fn shipping(mut self) -> Self {
        self.address.is_shipping_address = true;
        self
    }

    pub fn with_line1(mut self, line: &str) -> Self {
        self.address.address_line1 = line.to_string();
        self
    }

    /// Moves the modification time `days` days before the reference time
    pub fn modified_days_ago(mut self, days: i64) -> Self {
        self.address.modified = reference_time() - Duration::days(days);
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

/// Builder for constructing test contacts
pub struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    /// Starts a non-primary contact named `name` linked to the party
    pub fn new(name: &str, party_type: PartyType, party: &str) -> Self {
        let mut contact = Contact::new(name, PartyLink::new(party_type, party), name);
        contact.modified = reference_time();
        Self { contact }
    }

    pub fn primary(mut self) -> Self {
        self.contact.is_primary_contact = true;
        self
    }

    pub fn with_full_name(mut self, first: &str, last: &str) -> Self {
        self.contact.first_name = first.to_string();
        self.contact.last_name = Some(last.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.contact.email_id = Some(email.to_string());
        self
    }

    pub fn with_phone(mut self, phone: &str, mobile: &str) -> Self {
        self.contact.phone = Some(phone.to_string());
        self.contact.mobile_no = Some(mobile.to_string());
        self
    }

    pub fn with_role(mut self, designation: &str, department: &str) -> Self {
        self.contact.designation = Some(designation.to_string());
        self.contact.department = Some(department.to_string());
        self
    }

    pub fn modified_days_ago(mut self, days: i64) -> Self {
        self.contact.modified = reference_time() - Duration::days(days);
        self
    }

    pub fn build(self) -> Contact {
        self.contact
    }
}
