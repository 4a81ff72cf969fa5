//! Ledger accounts and companies
//!
//! A party posts against one ledger account per company. That account is
//! linked to the party through its `master_type` / `master_name` fields and
//! is named deterministically as `"<party> - <company abbreviation>"`.

use serde::{Deserialize, Serialize};

use core_kernel::{AccountName, CompanyName, PartyName, PartyType};

/// Whether an account can hold postings or only groups other accounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Groups child accounts; cannot be posted to
    Group,
    /// Holds postings
    #[default]
    Ledger,
}

/// An account in a company's chart of accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account name (e.g. "Acme - C")
    pub name: AccountName,
    /// Name without the company suffix (e.g. "Acme")
    pub account_name: String,
    /// Company owning the account
    pub company: CompanyName,
    /// Parent group account
    #[serde(default)]
    pub parent_account: Option<AccountName>,
    /// Group or ledger
    #[serde(default)]
    pub kind: AccountKind,
    /// Party type the account belongs to, for party accounts
    #[serde(default)]
    pub master_type: Option<PartyType>,
    /// Party the account belongs to, for party accounts
    #[serde(default)]
    pub master_name: Option<PartyName>,
    /// Whether postings are blocked
    #[serde(default)]
    pub freeze_account: bool,
    /// Payment terms in days for documents posted against this account
    #[serde(default)]
    pub credit_days: Option<u32>,
}

impl Account {
    /// Creates a new unlinked ledger account
    ///
    /// # Arguments
    ///
    /// * `name` - Unique account name
    /// * `account_name` - Name without the company suffix
    /// * `company` - Owning company
    pub fn new(
        name: impl Into<AccountName>,
        account_name: impl Into<String>,
        company: impl Into<CompanyName>,
    ) -> Self {
        Self {
            name: name.into(),
            account_name: account_name.into(),
            company: company.into(),
            parent_account: None,
            kind: AccountKind::Ledger,
            master_type: None,
            master_name: None,
            freeze_account: false,
            credit_days: None,
        }
    }

    /// Sets the parent account
    pub fn with_parent(mut self, parent: impl Into<AccountName>) -> Self {
        self.parent_account = Some(parent.into());
        self
    }

    /// Links the account to a party
    pub fn with_master(mut self, party_type: PartyType, party: impl Into<PartyName>) -> Self {
        self.master_type = Some(party_type);
        self.master_name = Some(party.into());
        self
    }

    /// Sets the account's credit days
    pub fn with_credit_days(mut self, days: u32) -> Self {
        self.credit_days = Some(days);
        self
    }

    /// Returns true if this is the posting account of `party` in `company`
    pub fn is_master_of(&self, party: &PartyName, party_type: PartyType, company: &CompanyName) -> bool {
        self.master_type == Some(party_type)
            && self.master_name.as_ref() == Some(party)
            && &self.company == company
    }

    /// Returns the credit days if set to a positive value
    pub fn credit_days(&self) -> Option<u32> {
        self.credit_days.filter(|days| *days > 0)
    }
}

/// A company keeping its own chart of accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: CompanyName,
    /// Abbreviation appended to account names
    pub abbr: String,
    /// Group under which customer accounts are created
    #[serde(default)]
    pub receivables_group: Option<AccountName>,
    /// Group under which supplier and lead accounts are created
    #[serde(default)]
    pub payables_group: Option<AccountName>,
    /// Company-wide default payment terms
    #[serde(default)]
    pub credit_days: Option<u32>,
}

impl Company {
    /// Creates a company without account groups or payment terms
    pub fn new(name: impl Into<CompanyName>, abbr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbr: abbr.into(),
            receivables_group: None,
            payables_group: None,
            credit_days: None,
        }
    }

    /// Sets the receivables and payables groups
    pub fn with_groups(
        mut self,
        receivables: impl Into<AccountName>,
        payables: impl Into<AccountName>,
    ) -> Self {
        self.receivables_group = Some(receivables.into());
        self.payables_group = Some(payables.into());
        self
    }

    /// Sets the company's credit days
    pub fn with_credit_days(mut self, days: u32) -> Self {
        self.credit_days = Some(days);
        self
    }

    /// Returns the group a new account for this party type is created under
    pub fn party_account_parent(&self, party_type: PartyType) -> Option<&AccountName> {
        if party_type.is_receivable() {
            self.receivables_group.as_ref()
        } else {
            self.payables_group.as_ref()
        }
    }

    /// Returns the credit days if set to a positive value
    pub fn credit_days(&self) -> Option<u32> {
        self.credit_days.filter(|days| *days > 0)
    }

    /// Returns the deterministic account name of `party` in this company
    pub fn party_account_name(&self, party: &PartyName) -> AccountName {
        AccountName::new(format!("{} - {}", party, self.abbr))
    }
}

/// A party account about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: AccountName,
    pub account_name: String,
    pub company: CompanyName,
    pub parent_account: AccountName,
    pub master_type: PartyType,
    pub master_name: PartyName,
}

impl NewAccount {
    /// Describes the ledger account of `party` in `company` under `parent`
    pub fn for_party(party: &PartyName, party_type: PartyType, company: &Company, parent: AccountName) -> Self {
        Self {
            name: company.party_account_name(party),
            account_name: party.to_string(),
            company: company.name.clone(),
            parent_account: parent,
            master_type: party_type,
            master_name: party.clone(),
        }
    }

    /// Builds the stored record: an unfrozen ledger account without payment terms
    pub fn into_account(self) -> Account {
        Account {
            name: self.name,
            account_name: self.account_name,
            company: self.company,
            parent_account: Some(self.parent_account),
            kind: AccountKind::Ledger,
            master_type: Some(self.master_type),
            master_name: Some(self.master_name),
            freeze_account: false,
            credit_days: None,
        }
    }
}
