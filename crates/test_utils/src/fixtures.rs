//! Pre-built Test Fixtures
//!
//! Provides ready-to-use records for the ledger and pricing side of a party
//! profile. These fixtures are consistent and predictable for unit tests.

use chrono::NaiveDate;
use domain_billing::{Account, Company};
use domain_party::{CustomerGroup, PriceList};
use core_kernel::PartyType;

/// Fixture for company records
pub struct CompanyFixtures;

impl CompanyFixtures {
    /// Company "C" with abbreviation "C" and both party groups configured
    pub fn standard() -> Company {
        Company::new("C", "C").with_groups("Debtors - C", "Creditors - C")
    }

    /// Company "C" without receivables or payables groups
    pub fn without_groups() -> Company {
        Company::new("C", "C")
    }

    /// A second company for cross-company tests
    pub fn subsidiary() -> Company {
        Company::new("Subsidiary", "SUB").with_groups("Debtors - SUB", "Creditors - SUB")
    }
}

/// Fixture for ledger accounts
pub struct AccountFixtures;

impl AccountFixtures {
    /// An account linked to `party` in company "C" under the default name
    pub fn linked(party_type: PartyType, party: &str) -> Account {
        let parent = if party_type.is_receivable() { "Debtors - C" } else { "Creditors - C" };
        Account::new(format!("{} - C", party), party, "C")
            .with_parent(parent)
            .with_master(party_type, party)
    }
}

/// Fixture for pricing records
pub struct PricingFixtures;

impl PricingFixtures {
    pub fn standard_selling() -> PriceList {
        PriceList::new("Standard Selling", "USD")
    }

    pub fn standard_buying() -> PriceList {
        PriceList::new("Standard Buying", "EUR")
    }

    pub fn restricted() -> PriceList {
        PriceList::new("PL-Restricted", "GBP")
    }

    /// Customer group "Commercial" defaulting to "Standard Selling"
    pub fn commercial_group() -> CustomerGroup {
        CustomerGroup::new("Commercial").with_default_price_list("Standard Selling")
    }

    /// Every price list above
    pub fn all_price_lists() -> Vec<PriceList> {
        vec![Self::standard_selling(), Self::standard_buying(), Self::restricted()]
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard posting date: 2024-01-15
    pub fn posting_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
    }

    /// Posting date plus `days` calendar days
    pub fn posting_date_plus(days: u64) -> NaiveDate {
        Self::posting_date() + chrono::Days::new(days)
    }
}
