//! Due date resolution
//!
//! A document's due date is its posting date plus the credit days found
//! first, in order, on the posting account, the party and the company.
//! Zero counts as unset.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use core_kernel::{
    AccountName, CompanyName, DateCalendar, FallbackChain, PartyName, PartyType, Resolved,
};

use crate::error::LedgerError;
use crate::ports::{CreditTermsPort, LedgerPort};

/// Computes due dates from credit terms
pub struct DueDateResolver<'a, T: CreditTermsPort + ?Sized> {
    ledger: &'a dyn LedgerPort,
    terms: &'a T,
    calendar: &'a dyn DateCalendar,
}

impl<'a, T: CreditTermsPort + ?Sized> DueDateResolver<'a, T> {
    pub fn new(ledger: &'a dyn LedgerPort, terms: &'a T, calendar: &'a dyn DateCalendar) -> Self {
        Self { ledger, terms, calendar }
    }

    /// Returns the due date for a document posted on `posting_date`
    ///
    /// Returns `Ok(None)` without consulting any source when there is no
    /// posting date. When no source has positive credit days the posting
    /// date itself is the due date.
    ///
    /// # Errors
    ///
    /// Fails if a source cannot be read or the date would overflow.
    #[instrument(skip(self))]
    pub fn resolve_due_date(
        &self,
        posting_date: Option<NaiveDate>,
        party: Option<&PartyName>,
        party_type: PartyType,
        account: Option<&AccountName>,
        company: Option<&CompanyName>,
    ) -> Result<Option<NaiveDate>, LedgerError> {
        let Some(posting_date) = posting_date else {
            return Ok(None);
        };

        let due_date = match self.credit_days(party, party_type, account, company)? {
            Some(days) => {
                debug!(days = days.value, source = days.source, "credit days resolved");
                self.calendar.add_days(posting_date, days.value)?
            }
            None => posting_date,
        };
        Ok(Some(due_date))
    }

    /// Finds the first positive credit days among account, party and company
    pub fn credit_days(
        &self,
        party: Option<&PartyName>,
        party_type: PartyType,
        account: Option<&AccountName>,
        company: Option<&CompanyName>,
    ) -> Result<Option<Resolved<u32>>, LedgerError> {
        FallbackChain::<u32, LedgerError>::new()
            .then("account", || match account {
                Some(account) => Ok(self.ledger.get_account(account)?.and_then(|a| a.credit_days())),
                None => Ok(None),
            })
            .then("party", || match party {
                Some(party) => Ok(self.terms.party_credit_days(party_type, party)?.filter(|d| *d > 0)),
                None => Ok(None),
            })
            .then("company", || match company {
                Some(company) => Ok(self.ledger.get_company(company)?.and_then(|c| c.credit_days())),
                None => Ok(None),
            })
            .resolve()
    }
}
