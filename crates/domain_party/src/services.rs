//! Party details resolution service
//!
//! [`PartyDetailsService::get_party_details`] assembles a
//! [`DerivedPartyProfile`] in five steps:
//!
//! 1. With a posting date, resolve the posting account (creating it if
//!    needed) and the due date. Given only an account, the party is the
//!    account's master.
//! 2. Unless bypassed, check that the actor may read the party.
//! 3. Load the party; select addresses and contact, copy master fields and
//!    defaults, resolve the price list.
//! 4. Fall back to the requested currency.
//! 5. For customers, attach the sales team.
//!
//! Any failure aborts the request. The only write is account creation in
//! step 1.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use core_kernel::{
    AccountName, CompanyName, CurrencyCode, DateCalendar, GregorianCalendar, Messages,
    NotificationSink, OperationMetadata, PartyName, PartyType, PriceListName, UserId,
};
use domain_billing::{AccountResolver, DueDateResolver, LedgerPort};

use crate::address::{AddressFormatter, StandardAddressFormatter};
use crate::contact::{ContactFormatter, StandardContactFormatter};
use crate::error::PartyDetailsError;
use crate::party::DefaultsPolicy;
use crate::ports::{PartyPort, PartyPortExt, PermissionPort};
use crate::price_list::{AccessRestrictions, PriceListResolver};
use crate::profile::{AccountLinkage, DerivedPartyProfile};
use crate::selector::PartySelector;

/// Inputs of a party details request
///
/// Blank strings are treated as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartyDetailsRequest {
    pub party: Option<PartyName>,
    pub account: Option<AccountName>,
    pub party_type: PartyType,
    pub company: Option<CompanyName>,
    pub posting_date: Option<NaiveDate>,
    pub price_list: Option<PriceListName>,
    pub currency: Option<CurrencyCode>,
    pub ignore_permissions: bool,
}

impl PartyDetailsRequest {
    /// Creates a request for a party of the given type
    pub fn new(party_type: PartyType) -> Self {
        Self {
            party_type,
            ..Self::default()
        }
    }

    pub fn for_party(party_type: PartyType, party: impl Into<String>) -> Self {
        Self::new(party_type).with_party(party)
    }

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = PartyName::non_blank(party);
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = AccountName::non_blank(account);
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = CompanyName::non_blank(company);
        self
    }

    pub fn with_posting_date(mut self, posting_date: NaiveDate) -> Self {
        self.posting_date = Some(posting_date);
        self
    }

    pub fn with_price_list(mut self, price_list: impl Into<String>) -> Self {
        self.price_list = PriceListName::non_blank(price_list);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = CurrencyCode::non_blank(currency);
        self
    }

    /// Skips the read permission check
    pub fn ignoring_permissions(mut self) -> Self {
        self.ignore_permissions = true;
        self
    }

    /// Drops values that are present but blank
    ///
    /// Requests deserialized from a document carry empty strings for unset
    /// fields; resolution always works on the normalized form.
    pub fn normalized(mut self) -> Self {
        self.party = self.party.and_then(|v| PartyName::non_blank(v.as_str()));
        self.account = self.account.and_then(|v| AccountName::non_blank(v.as_str()));
        self.company = self.company.and_then(|v| CompanyName::non_blank(v.as_str()));
        self.price_list = self.price_list.and_then(|v| PriceListName::non_blank(v.as_str()));
        self.currency = self.currency.and_then(|v| CurrencyCode::non_blank(v.as_str()));
        self
    }
}

/// Who is asking and under which restrictions
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    pub actor: UserId,
    pub restrictions: AccessRestrictions,
    pub metadata: OperationMetadata,
}

impl ResolutionContext {
    pub fn new(actor: impl Into<UserId>) -> Self {
        let actor = actor.into();
        Self {
            metadata: OperationMetadata::initiated_by(actor.clone()),
            actor,
            restrictions: AccessRestrictions::none(),
        }
    }

    pub fn with_restrictions(mut self, restrictions: AccessRestrictions) -> Self {
        self.restrictions = restrictions;
        self
    }
}

/// Application service resolving party profiles
pub struct PartyDetailsService {
    ledger: Arc<dyn LedgerPort>,
    parties: Arc<dyn PartyPort>,
    permissions: Arc<dyn PermissionPort>,
    notifier: Arc<dyn NotificationSink>,
    calendar: Arc<dyn DateCalendar>,
    address_formatter: Arc<dyn AddressFormatter>,
    contact_formatter: Arc<dyn ContactFormatter>,
    messages: Messages,
}

impl PartyDetailsService {
    /// Creates a service with the Gregorian calendar, the standard
    /// formatters and English messages
    pub fn new(
        ledger: Arc<dyn LedgerPort>,
        parties: Arc<dyn PartyPort>,
        permissions: Arc<dyn PermissionPort>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            ledger,
            parties,
            permissions,
            notifier,
            calendar: Arc::new(GregorianCalendar),
            address_formatter: Arc::new(StandardAddressFormatter),
            contact_formatter: Arc::new(StandardContactFormatter),
            messages: Messages::default(),
        }
    }

    pub fn with_calendar(mut self, calendar: Arc<dyn DateCalendar>) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_formatters(
        mut self,
        addresses: Arc<dyn AddressFormatter>,
        contacts: Arc<dyn ContactFormatter>,
    ) -> Self {
        self.address_formatter = addresses;
        self.contact_formatter = contacts;
        self
    }

    /// Sets the catalog notices and errors are rendered from
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Resolves the profile of the requested party
    ///
    /// # Errors
    ///
    /// * `PartyDetailsError::Ledger` - company missing, or account creation failed
    /// * `PartyDetailsError::PartyRequired` - no party could be determined
    /// * `PartyDetailsError::PermissionDenied` - the actor may not read the party
    /// * `PartyDetailsError::Port` - the party does not exist or a store failed
    #[instrument(
        skip_all,
        fields(
            correlation_id = %context.metadata.correlation_id,
            actor = %context.actor,
            party_type = %request.party_type,
        )
    )]
    pub fn get_party_details(
        &self,
        request: &PartyDetailsRequest,
        context: &ResolutionContext,
    ) -> Result<DerivedPartyProfile, PartyDetailsError> {
        let request = &request.clone().normalized();
        let party_type = request.party_type;

        // Step 1
        let (party, account_linkage) = self.set_account_and_due_date(request)?;
        let party = party.ok_or(PartyDetailsError::PartyRequired { party_type })?;

        // Step 2
        if !request.ignore_permissions
            && !self.permissions.can_read(party_type, &party, &context.actor)?
        {
            warn!(party = %party, "read permission denied");
            return Err(PartyDetailsError::PermissionDenied {
                actor: context.actor.clone(),
                party_type,
                party,
            });
        }

        // Step 3
        let record = self.parties.get_party_required(party_type, &party)?;
        let selector = PartySelector::new(
            self.parties.as_ref(),
            self.address_formatter.as_ref(),
            self.contact_formatter.as_ref(),
        );
        let addresses = selector.select_address(&record.name, party_type)?;
        let contact = selector.select_contact(&record.name, party_type)?;
        let master = record.details.master_fields();
        let mut defaults = DefaultsPolicy::for_party_type(record.party_type()).apply(&record.defaults);
        let price_list = PriceListResolver::new(self.parties.as_ref()).resolve_price_list(
            &record,
            &context.restrictions,
            request.price_list.as_ref(),
        )?;

        // Step 4
        if defaults.currency.is_none() {
            defaults.currency = request.currency.clone();
        }

        // Step 5
        let sales_team = record.details.sales_team().map(<[_]>::to_vec);

        info!(
            party = %record.name,
            account = ?account_linkage.as_ref().and_then(|l| l.account.as_ref()),
            price_list = ?price_list.as_ref().map(|p| &p.name),
            "party details resolved"
        );

        Ok(DerivedPartyProfile {
            party_type,
            party: record.name,
            account_linkage,
            addresses,
            contact,
            master,
            defaults,
            price_list,
            sales_team,
        })
    }

    /// Seeds the party identity and, in invoice context, account and due date
    fn set_account_and_due_date(
        &self,
        request: &PartyDetailsRequest,
    ) -> Result<(Option<PartyName>, Option<AccountLinkage>), PartyDetailsError> {
        let Some(posting_date) = request.posting_date else {
            return Ok((request.party.clone(), None));
        };

        let accounts = AccountResolver::new(self.ledger.as_ref(), self.notifier.as_ref(), &self.messages);
        let (party, account) = match (&request.party, &request.account) {
            (Some(party), _) => {
                let account = accounts
                    .resolve_account(request.company.as_ref(), Some(party), request.party_type)?
                    .map(|account| account.name);
                (Some(party.clone()), account)
            }
            (None, Some(account)) => (accounts.party_for_account(account)?, Some(account.clone())),
            (None, None) => (None, None),
        };

        let due_date = DueDateResolver::new(self.ledger.as_ref(), self.parties.as_ref(), self.calendar.as_ref())
            .resolve_due_date(
                Some(posting_date),
                party.as_ref(),
                request.party_type,
                account.as_ref(),
                request.company.as_ref(),
            )?;

        Ok((party, Some(AccountLinkage { account, due_date })))
    }
}
