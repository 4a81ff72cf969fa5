//! JSON dataset for the command-line harness
//!
//! A dataset holds every record a resolution may consult. It is loaded
//! into the in-memory adapters, which then back a `PartyDetailsService`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, instrument};

use core_kernel::{Messages, NotificationSink, PartyName, PartyType, UserId};
use domain_billing::ports::mock::MockLedgerPort;
use domain_billing::{Account, Company};
use domain_party::{
    AccessRestrictions, Address, Contact, CustomerGroup, MockPartyPort, MockPermissionPort, Party,
    PartyDetailsService, PriceList,
};

use crate::error::CliError;

/// Permission for one actor to read one party
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadGrant {
    pub actor: UserId,
    pub party_type: PartyType,
    pub party: PartyName,
}

/// Records loaded from a dataset file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub companies: Vec<Company>,
    pub accounts: Vec<Account>,
    pub parties: Vec<Party>,
    pub addresses: Vec<Address>,
    pub contacts: Vec<Contact>,
    pub customer_groups: Vec<CustomerGroup>,
    pub price_lists: Vec<PriceList>,
    /// Read permissions; `None` permits every read
    pub grants: Option<Vec<ReadGrant>>,
    /// Restrictions applied to the configured actor
    pub restrictions: AccessRestrictions,
}

impl Dataset {
    /// Reads a dataset file
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let json = fs::read_to_string(path).map_err(|source| CliError::DatasetIo {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&json)?;
        debug!(
            companies = dataset.companies.len(),
            parties = dataset.parties.len(),
            accounts = dataset.accounts.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses a dataset from JSON text
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads the records into in-memory adapters and wires a service
    pub fn into_service(self, notifier: Arc<dyn NotificationSink>, messages: Messages) -> PartyDetailsService {
        let ledger = self.companies.into_iter().fold(MockLedgerPort::new(), MockLedgerPort::with_company);
        let ledger = self.accounts.into_iter().fold(ledger, MockLedgerPort::with_account);

        let parties = self.parties.into_iter().fold(MockPartyPort::new(), MockPartyPort::with_party);
        let parties = self.addresses.into_iter().fold(parties, MockPartyPort::with_address);
        let parties = self.contacts.into_iter().fold(parties, MockPartyPort::with_contact);
        let parties = self
            .customer_groups
            .into_iter()
            .fold(parties, MockPartyPort::with_customer_group);
        let parties = self.price_lists.into_iter().fold(parties, MockPartyPort::with_price_list);

        let permissions = match self.grants {
            None => MockPermissionPort::allow_all(),
            Some(grants) => grants.into_iter().fold(MockPermissionPort::new(), |permissions, grant| {
                permissions.with_grant(grant.actor, grant.party_type, grant.party)
            }),
        };

        PartyDetailsService::new(Arc::new(ledger), Arc::new(parties), Arc::new(permissions), notifier)
            .with_messages(messages)
    }
}
