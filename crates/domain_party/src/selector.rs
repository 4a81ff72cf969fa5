//! Address and contact selection
//!
//! The billing address is the party's primary address, the shipping address
//! (customers and leads only) its shipping address, and the contact its
//! primary contact. Missing records leave the fields empty.

use tracing::{debug, instrument};

use core_kernel::{AddressName, PartyName, PartyType, PortError};

use crate::address::{AddressFlag, AddressFormatter};
use crate::contact::{ContactDetails, ContactFormatter};
use crate::ports::PartyPort;
use crate::record::PartyLink;

/// An address chosen for a profile together with its display text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedAddress {
    pub name: Option<AddressName>,
    /// Empty when no address was found
    pub display: String,
}

/// Billing and shipping addresses chosen for a party
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSelection {
    pub billing: SelectedAddress,
    /// Present for party types that carry a shipping address
    pub shipping: Option<SelectedAddress>,
}

/// Picks the addresses and contact of a party
pub struct PartySelector<'a> {
    parties: &'a dyn PartyPort,
    addresses: &'a dyn AddressFormatter,
    contacts: &'a dyn ContactFormatter,
}

impl<'a> PartySelector<'a> {
    pub fn new(
        parties: &'a dyn PartyPort,
        addresses: &'a dyn AddressFormatter,
        contacts: &'a dyn ContactFormatter,
    ) -> Self {
        Self { parties, addresses, contacts }
    }

    #[instrument(skip(self))]
    pub fn select_address(&self, party: &PartyName, party_type: PartyType) -> Result<AddressSelection, PortError> {
        let link = PartyLink::new(party_type, party.clone());
        let billing = self.flagged_address(&link, AddressFlag::Primary)?;
        let shipping = if party_type.has_shipping_address() {
            Some(self.flagged_address(&link, AddressFlag::Shipping)?)
        } else {
            None
        };
        Ok(AddressSelection { billing, shipping })
    }

    #[instrument(skip(self))]
    pub fn select_contact(&self, party: &PartyName, party_type: PartyType) -> Result<ContactDetails, PortError> {
        let link = PartyLink::new(party_type, party.clone());
        match self.parties.find_contact(&link)? {
            Some(contact) => {
                debug!(contact = %contact.name, "primary contact found");
                Ok(self.contacts.details(&contact))
            }
            None => Ok(ContactDetails::default()),
        }
    }

    fn flagged_address(&self, link: &PartyLink, flag: AddressFlag) -> Result<SelectedAddress, PortError> {
        Ok(match self.parties.find_address(link, flag)? {
            Some(address) => {
                debug!(address = %address.name, ?flag, "address found");
                SelectedAddress {
                    display: self.addresses.display_text(&address),
                    name: Some(address.name),
                }
            }
            None => SelectedAddress::default(),
        })
    }
}
