//! Price list resolution
//!
//! The price list applied to a new document is the first of:
//!
//! 1. the price list the actor is restricted to, when the restriction names
//!    exactly one value
//! 2. the party's default price list
//! 3. for customers, the default price list of the customer group
//! 4. the price list the caller asked for
//!
//! The currency of the chosen price list is looked up afterwards. No price
//! list at all is a valid outcome.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::{CurrencyCode, CustomerGroupName, FallbackChain, PartyType, PortError, PriceListName};

use crate::party::Party;
use crate::ports::PartyPort;

/// A named pricing schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList {
    pub name: PriceListName,
    pub currency: CurrencyCode,
}

impl PriceList {
    pub fn new(name: impl Into<PriceListName>, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            name: name.into(),
            currency: currency.into(),
        }
    }
}

/// A grouping of customers sharing defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerGroup {
    pub name: CustomerGroupName,
    #[serde(default)]
    pub default_price_list: Option<PriceListName>,
}

impl CustomerGroup {
    pub fn new(name: impl Into<CustomerGroupName>) -> Self {
        Self {
            name: name.into(),
            default_price_list: None,
        }
    }

    pub fn with_default_price_list(mut self, price_list: impl Into<PriceListName>) -> Self {
        self.default_price_list = Some(price_list.into());
        self
    }
}

/// Values an actor is restricted to for one kind of record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Restriction<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> Restriction<T> {
    /// Returns the restricted value if there is exactly one
    ///
    /// A list never counts as a single value, even with one element.
    pub fn single(&self) -> Option<&T> {
        match self {
            Restriction::Single(value) => Some(value),
            Restriction::Many(_) => None,
        }
    }
}

/// Record restrictions applying to the current actor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRestrictions {
    #[serde(default)]
    pub price_list: Option<Restriction<PriceListName>>,
}

impl AccessRestrictions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_price_list(mut self, restriction: Restriction<PriceListName>) -> Self {
        self.price_list = Some(restriction);
        self
    }

    /// Returns the single price list the actor is restricted to, if any
    pub fn single_price_list(&self) -> Option<&PriceListName> {
        self.price_list.as_ref().and_then(Restriction::single)
    }
}

/// The price list chosen for a party
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPriceList {
    pub name: PriceListName,
    /// None if the price list record does not exist
    pub currency: Option<CurrencyCode>,
    /// Stored type of the party the list was resolved for
    pub keyed_for: PartyType,
    /// Which source supplied the price list
    pub source: &'static str,
}

impl ResolvedPriceList {
    /// Output key: selling for customers, buying otherwise
    pub fn field_name(&self) -> &'static str {
        self.keyed_for.field_names().price_list
    }
}

/// Chooses the price list for a party
pub struct PriceListResolver<'a> {
    parties: &'a dyn PartyPort,
}

impl<'a> PriceListResolver<'a> {
    pub fn new(parties: &'a dyn PartyPort) -> Self {
        Self { parties }
    }

    /// Resolves the price list and its currency
    ///
    /// The output key follows the party's stored type, not the type the
    /// caller asked for.
    #[instrument(skip(self, party, restrictions), fields(party = %party.name))]
    pub fn resolve_price_list(
        &self,
        party: &Party,
        restrictions: &AccessRestrictions,
        requested_price_list: Option<&PriceListName>,
    ) -> Result<Option<ResolvedPriceList>, PortError> {
        let party_type = party.party_type();

        let resolved = FallbackChain::<PriceListName, PortError>::new()
            .then("restriction", || Ok(restrictions.single_price_list().cloned()))
            .then("party", || Ok(party.defaults.price_list.clone()))
            .then_if(party_type == PartyType::Customer, "customer_group", || {
                match party.details.customer_group() {
                    Some(group) => Ok(self
                        .parties
                        .get_customer_group(group)?
                        .and_then(|group| group.default_price_list)),
                    None => Ok(None),
                }
            })
            .then("requested", || Ok(requested_price_list.cloned()))
            .resolve()?;

        let Some(resolved) = resolved else {
            debug!("no price list");
            return Ok(None);
        };

        let currency = self
            .parties
            .get_price_list(&resolved.value)?
            .map(|price_list| price_list.currency);
        debug!(price_list = %resolved.value, source = resolved.source, ?currency, "price list resolved");

        Ok(Some(ResolvedPriceList {
            name: resolved.value,
            currency,
            keyed_for: party_type,
            source: resolved.source,
        }))
    }
}
