//! Ledger Domain Ports
//!
//! The ledger domain reads accounts and companies from a record store and
//! creates party accounts in it. `LedgerPort` is that store seen from the
//! account and due-date resolvers; `CreditTermsPort` supplies the payment
//! terms kept on party records, which belong to the party domain.
//!
//! # Atomic account creation
//!
//! `create_account` must refuse a name that already exists with
//! `PortError::Conflict`, checking and inserting in one step (a unique
//! constraint or a transaction). Two resolutions racing for a brand-new
//! party then create exactly one account.

use core_kernel::{AccountName, CompanyName, DomainPort, PartyName, PartyType, PortError};

use crate::account::{Account, Company, NewAccount};

/// Record store operations needed by the ledger resolvers
pub trait LedgerPort: DomainPort {
    /// Finds the account linked to `party` of `party_type` in `company`
    fn find_party_account(
        &self,
        party: &PartyName,
        party_type: PartyType,
        company: &CompanyName,
    ) -> Result<Option<Account>, PortError>;

    /// Retrieves an account by name
    fn get_account(&self, name: &AccountName) -> Result<Option<Account>, PortError>;

    /// Checks whether any account carries this name
    fn account_exists(&self, name: &AccountName) -> Result<bool, PortError>;

    /// Creates an account, failing with `PortError::Conflict` if the name is taken
    fn create_account(&self, account: NewAccount) -> Result<Account, PortError>;

    /// Retrieves a company by name
    fn get_company(&self, name: &CompanyName) -> Result<Option<Company>, PortError>;
}

/// Extension trait for LedgerPort with convenience methods
pub trait LedgerPortExt: LedgerPort {
    /// Gets a company or returns a NotFound error
    fn get_company_required(&self, name: &CompanyName) -> Result<Company, PortError> {
        self.get_company(name)?
            .ok_or_else(|| PortError::not_found(CompanyName::entity(), name))
    }
}

// Blanket implementation for all LedgerPort implementors
impl<T: LedgerPort + ?Sized> LedgerPortExt for T {}

/// Payment terms recorded on party records
pub trait CreditTermsPort: DomainPort {
    /// Returns the party's own credit days, if the party exists and has any
    fn party_credit_days(
        &self,
        party_type: PartyType,
        party: &PartyName,
    ) -> Result<Option<u32>, PortError>;
}

/// Mock implementations of the ledger ports for testing
///
/// These adapters keep records in memory and are useful for unit testing
/// without a record store.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::RwLock;

    fn poisoned() -> PortError {
        PortError::internal("ledger store lock poisoned")
    }

    /// In-memory mock implementation of LedgerPort
    #[derive(Debug, Default)]
    pub struct MockLedgerPort {
        accounts: RwLock<BTreeMap<AccountName, Account>>,
        companies: RwLock<HashMap<CompanyName, Company>>,
    }

    impl MockLedgerPort {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates a company
        pub fn with_company(self, company: Company) -> Self {
            if let Ok(mut companies) = self.companies.write() {
                companies.insert(company.name.clone(), company);
            }
            self
        }

        /// Pre-populates an account
        pub fn with_account(self, account: Account) -> Self {
            if let Ok(mut accounts) = self.accounts.write() {
                accounts.insert(account.name.clone(), account);
            }
            self
        }

        /// Returns a snapshot of all accounts, ordered by name
        pub fn accounts(&self) -> Vec<Account> {
            self.accounts
                .read()
                .map(|accounts| accounts.values().cloned().collect())
                .unwrap_or_default()
        }
    }

    impl DomainPort for MockLedgerPort {}

    impl LedgerPort for MockLedgerPort {
        fn find_party_account(
            &self,
            party: &PartyName,
            party_type: PartyType,
            company: &CompanyName,
        ) -> Result<Option<Account>, PortError> {
            let accounts = self.accounts.read().map_err(|_| poisoned())?;
            Ok(accounts
                .values()
                .find(|account| account.is_master_of(party, party_type, company))
                .cloned())
        }

        fn get_account(&self, name: &AccountName) -> Result<Option<Account>, PortError> {
            let accounts = self.accounts.read().map_err(|_| poisoned())?;
            Ok(accounts.get(name).cloned())
        }

        fn account_exists(&self, name: &AccountName) -> Result<bool, PortError> {
            let accounts = self.accounts.read().map_err(|_| poisoned())?;
            Ok(accounts.contains_key(name))
        }

        fn create_account(&self, account: NewAccount) -> Result<Account, PortError> {
            let mut accounts = self.accounts.write().map_err(|_| poisoned())?;
            if accounts.contains_key(&account.name) {
                return Err(PortError::conflict(format!(
                    "Account {} already exists",
                    account.name
                )));
            }
            let account = account.into_account();
            accounts.insert(account.name.clone(), account.clone());
            Ok(account)
        }

        fn get_company(&self, name: &CompanyName) -> Result<Option<Company>, PortError> {
            let companies = self.companies.read().map_err(|_| poisoned())?;
            Ok(companies.get(name).cloned())
        }
    }

    /// In-memory credit terms keyed by party
    #[derive(Debug, Default)]
    pub struct MockCreditTerms {
        terms: HashMap<(PartyType, PartyName), u32>,
    }

    impl MockCreditTerms {
        /// Creates terms with no parties
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets a party's credit days
        pub fn with_party(mut self, party_type: PartyType, party: impl Into<PartyName>, days: u32) -> Self {
            self.terms.insert((party_type, party.into()), days);
            self
        }
    }

    impl DomainPort for MockCreditTerms {}

    impl CreditTermsPort for MockCreditTerms {
        fn party_credit_days(
            &self,
            party_type: PartyType,
            party: &PartyName,
        ) -> Result<Option<u32>, PortError> {
            Ok(self.terms.get(&(party_type, party.clone())).copied())
        }
    }
}
