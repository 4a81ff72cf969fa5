//! Party account resolution
//!
//! Every party posts against one ledger account per company. The resolver
//! finds that account through its master link and creates it on first use
//! under the company's receivables or payables group, named
//! `"{party} - {company abbreviation}"`.
//!
//! An account that already carries the generated name but is linked to
//! something else is never relinked; resolution then reports no account.

use tracing::{debug, info, instrument, warn};

use core_kernel::{
    AccountName, CompanyName, Messages, NotificationSink, PartyName, PartyType, PortError,
};

use crate::account::{Account, NewAccount};
use crate::error::LedgerError;
use crate::ports::{LedgerPort, LedgerPortExt};

/// Resolves and lazily creates party ledger accounts
pub struct AccountResolver<'a> {
    ledger: &'a dyn LedgerPort,
    notifier: &'a dyn NotificationSink,
    messages: &'a Messages,
}

impl<'a> AccountResolver<'a> {
    pub fn new(
        ledger: &'a dyn LedgerPort,
        notifier: &'a dyn NotificationSink,
        messages: &'a Messages,
    ) -> Self {
        Self { ledger, notifier, messages }
    }

    /// Returns the account `party` posts against in `company`, creating it if absent
    ///
    /// The account is returned on the call that creates it as well as on
    /// every later call.
    ///
    /// Returns `Ok(None)` when no party is given (a blank name counts as
    /// none), or when the generated
    /// account name is already taken by an account that is not linked to
    /// this party.
    ///
    /// # Errors
    ///
    /// * `LedgerError::CompanyRequired` - a party was given without a company
    /// * `LedgerError::MissingParentGroup` - the company has no group for this party type
    /// * `LedgerError::Port` - the company does not exist or the store failed
    #[instrument(skip(self))]
    pub fn resolve_account(
        &self,
        company: Option<&CompanyName>,
        party: Option<&PartyName>,
        party_type: PartyType,
    ) -> Result<Option<Account>, LedgerError> {
        let Some(party) = party.filter(|party| !party.as_str().trim().is_empty()) else {
            return Ok(None);
        };
        let Some(company) = company else {
            return Err(LedgerError::CompanyRequired {
                party: party.clone(),
                party_type,
            });
        };

        if let Some(account) = self.ledger.find_party_account(party, party_type, company)? {
            debug!(account = %account.name, "linked account found");
            return Ok(Some(account));
        }

        let company_record = self.ledger.get_company_required(company)?;
        let account_name = company_record.party_account_name(party);
        if self.ledger.account_exists(&account_name)? {
            // Another resolution may have created and linked it since the first lookup.
            if let Some(account) = self.ledger.find_party_account(party, party_type, company)? {
                debug!(account = %account.name, "linked account found on second lookup");
                return Ok(Some(account));
            }
            warn!(account = %account_name, "account name taken by an unlinked account, not relinking");
            return Ok(None);
        }

        let parent = company_record
            .party_account_parent(party_type)
            .cloned()
            .ok_or_else(|| LedgerError::MissingParentGroup {
                company: company.clone(),
                party_type,
            })?;

        let new_account = NewAccount::for_party(party, party_type, &company_record, parent);
        match self.ledger.create_account(new_account) {
            Ok(account) => {
                info!(account = %account.name, parent = ?account.parent_account, "party account created");
                self.notifier.notify(&self.messages.format(
                    "account-created",
                    &[("account", account.name.to_string())],
                ));
                Ok(Some(account))
            }
            Err(PortError::Conflict { .. }) => {
                debug!(account = %account_name, "account created concurrently, looking up again");
                Ok(self.ledger.find_party_account(party, party_type, company)?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the party an account is bound to, if any
    #[instrument(skip(self))]
    pub fn party_for_account(&self, account: &AccountName) -> Result<Option<PartyName>, LedgerError> {
        Ok(self
            .ledger
            .get_account(account)?
            .and_then(|account| account.master_name))
    }
}
