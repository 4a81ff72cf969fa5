//! Party Domain Ports
//!
//! This module defines the port interfaces the party domain reads from.
//!
//! # Architecture
//!
//! `PartyPort` gives read access to party records and the records linked to
//! them (addresses, contacts) or referenced by them (customer groups, price
//! lists). It extends `CreditTermsPort`, so any party store also supplies
//! the party credit days consulted by the due-date resolver.
//!
//! `PermissionPort` answers whether an actor may read a party.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_party::ports::PartyPort;
//! use std::sync::Arc;
//!
//! let parties: Arc<dyn PartyPort> = Arc::new(MockPartyPort::new().with_party(party));
//! let party = parties.get_party_required(PartyType::Customer, &name)?;
//! ```
//!
//! # Flagged records
//!
//! `find_address` and `find_contact` return one record even when several
//! carry the flag: the most recently modified, then the lowest name (see
//! [`crate::record::preferred`]).

use core_kernel::{CustomerGroupName, DomainPort, PartyName, PartyType, PortError, PriceListName, UserId};
use domain_billing::CreditTermsPort;

use crate::address::{Address, AddressFlag};
use crate::contact::Contact;
use crate::party::Party;
use crate::price_list::{CustomerGroup, PriceList};
use crate::record::PartyLink;

/// Read access to parties and their related records
pub trait PartyPort: CreditTermsPort {
    /// Retrieves a party stored under `party_type`
    fn get_party(&self, party_type: PartyType, name: &PartyName) -> Result<Option<Party>, PortError>;

    /// Finds the address linked to a party that carries `flag`
    fn find_address(&self, link: &PartyLink, flag: AddressFlag) -> Result<Option<Address>, PortError>;

    /// Finds the primary contact linked to a party
    fn find_contact(&self, link: &PartyLink) -> Result<Option<Contact>, PortError>;

    /// Retrieves a customer group by name
    fn get_customer_group(&self, name: &CustomerGroupName) -> Result<Option<CustomerGroup>, PortError>;

    /// Retrieves a price list by name
    fn get_price_list(&self, name: &PriceListName) -> Result<Option<PriceList>, PortError>;
}

/// Extension trait for PartyPort with convenience methods
pub trait PartyPortExt: PartyPort {
    /// Gets a party or returns a NotFound error
    fn get_party_required(&self, party_type: PartyType, name: &PartyName) -> Result<Party, PortError> {
        self.get_party(party_type, name)?
            .ok_or_else(|| PortError::not_found(party_type.as_str(), name))
    }
}

// Blanket implementation for all PartyPort implementors
impl<T: PartyPort + ?Sized> PartyPortExt for T {}

/// Read permission checks
pub trait PermissionPort: DomainPort {
    /// Returns true if `actor` may read the party
    fn can_read(&self, party_type: PartyType, party: &PartyName, actor: &UserId) -> Result<bool, PortError>;
}

/// Mock implementations of the party ports for testing
///
/// These adapters hold records in memory. They are filled through builder
/// methods and never change afterwards.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};

    use crate::record::preferred;

    /// In-memory mock implementation of PartyPort
    #[derive(Debug, Default)]
    pub struct MockPartyPort {
        parties: HashMap<(PartyType, PartyName), Party>,
        addresses: Vec<Address>,
        contacts: Vec<Contact>,
        customer_groups: HashMap<CustomerGroupName, CustomerGroup>,
        price_lists: HashMap<PriceListName, PriceList>,
    }

    impl MockPartyPort {
        /// Creates an empty store
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a party under its stored type
        pub fn with_party(mut self, party: Party) -> Self {
            self.parties.insert((party.party_type(), party.name.clone()), party);
            self
        }

        pub fn with_address(mut self, address: Address) -> Self {
            self.addresses.push(address);
            self
        }

        pub fn with_contact(mut self, contact: Contact) -> Self {
            self.contacts.push(contact);
            self
        }

        pub fn with_customer_group(mut self, group: CustomerGroup) -> Self {
            self.customer_groups.insert(group.name.clone(), group);
            self
        }

        pub fn with_price_list(mut self, price_list: PriceList) -> Self {
            self.price_lists.insert(price_list.name.clone(), price_list);
            self
        }
    }

    impl DomainPort for MockPartyPort {}

    impl CreditTermsPort for MockPartyPort {
        fn party_credit_days(&self, party_type: PartyType, party: &PartyName) -> Result<Option<u32>, PortError> {
            Ok(self
                .parties
                .get(&(party_type, party.clone()))
                .and_then(|party| party.credit_days))
        }
    }

    impl PartyPort for MockPartyPort {
        fn get_party(&self, party_type: PartyType, name: &PartyName) -> Result<Option<Party>, PortError> {
            Ok(self.parties.get(&(party_type, name.clone())).cloned())
        }

        fn find_address(&self, link: &PartyLink, flag: AddressFlag) -> Result<Option<Address>, PortError> {
            let candidates = self
                .addresses
                .iter()
                .filter(|address| &address.link == link && address.has_flag(flag));
            Ok(preferred(candidates).cloned())
        }

        fn find_contact(&self, link: &PartyLink) -> Result<Option<Contact>, PortError> {
            let candidates = self
                .contacts
                .iter()
                .filter(|contact| &contact.link == link && contact.is_primary_contact);
            Ok(preferred(candidates).cloned())
        }

        fn get_customer_group(&self, name: &CustomerGroupName) -> Result<Option<CustomerGroup>, PortError> {
            Ok(self.customer_groups.get(name).cloned())
        }

        fn get_price_list(&self, name: &PriceListName) -> Result<Option<PriceList>, PortError> {
            Ok(self.price_lists.get(name).cloned())
        }
    }

    /// In-memory permission table
    #[derive(Debug, Default)]
    pub struct MockPermissionPort {
        grants: HashSet<(UserId, PartyType, PartyName)>,
        allow_all: bool,
    }

    impl MockPermissionPort {
        /// Creates a table that denies everything
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a table that allows everything
        pub fn allow_all() -> Self {
            Self {
                allow_all: true,
                ..Self::default()
            }
        }

        /// Grants `actor` read access to one party
        pub fn with_grant(
            mut self,
            actor: impl Into<UserId>,
            party_type: PartyType,
            party: impl Into<PartyName>,
        ) -> Self {
            self.grants.insert((actor.into(), party_type, party.into()));
            self
        }
    }

    impl DomainPort for MockPermissionPort {}

    impl PermissionPort for MockPermissionPort {
        fn can_read(&self, party_type: PartyType, party: &PartyName, actor: &UserId) -> Result<bool, PortError> {
            Ok(self.allow_all
                || self
                    .grants
                    .contains(&(actor.clone(), party_type, party.clone())))
        }
    }
}
