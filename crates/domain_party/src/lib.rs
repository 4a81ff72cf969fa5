//! Party Domain
//!
//! This crate turns a party identity and a sparse document context into a
//! transaction-ready party profile: posting account and due date, billing
//! and shipping address, primary contact, master fields, defaults, price
//! list and, for customers, the sales team.
//!
//! # Party Types
//!
//! - **Customer**: posts against a receivable account, buys at selling prices
//! - **Supplier**: posts against a payable account, sells at buying prices
//! - **Lead**: a prospective customer; billed through the customer address key
//!
//! # Examples
//!
//! ```rust,ignore
//! use domain_party::{PartyDetailsRequest, PartyDetailsService, ResolutionContext};
//!
//! let service = PartyDetailsService::new(ledger, parties, permissions, notifier);
//! let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme")
//!     .with_company("C")
//!     .with_posting_date(posting_date);
//!
//! let profile = service.get_party_details(&request, &ResolutionContext::new("alice"))?;
//! let json = serde_json::to_value(&profile)?;
//! assert_eq!(json["debit_to"], "Acme - C");
//! ```

pub mod address;
pub mod contact;
pub mod error;
pub mod party;
pub mod ports;
pub mod price_list;
pub mod profile;
pub mod record;
pub mod selector;
pub mod services;

pub use address::{Address, AddressFlag, AddressFormatter, StandardAddressFormatter};
pub use contact::{Contact, ContactDetails, ContactFormatter, StandardContactFormatter};
pub use error::PartyDetailsError;
pub use party::{
    CustomerDetails, DefaultsPolicy, LeadDetails, MasterFields, Party, PartyDefaults,
    PartyDetails, ProfileDefaults, SalesTeamAssignment, SupplierDetails,
};
pub use ports::{PartyPort, PartyPortExt, PermissionPort};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockPartyPort, MockPermissionPort};
pub use price_list::{
    AccessRestrictions, CustomerGroup, PriceList, PriceListResolver, ResolvedPriceList, Restriction,
};
pub use profile::{AccountLinkage, DerivedPartyProfile};
pub use record::{LinkedRecord, PartyLink};
pub use selector::{AddressSelection, PartySelector, SelectedAddress};
pub use services::{PartyDetailsRequest, PartyDetailsService, ResolutionContext};
