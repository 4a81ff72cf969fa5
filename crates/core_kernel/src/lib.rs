//! Core Kernel - Foundational types shared by the resolution domains
//!
//! This crate provides the building blocks used by the ledger and party
//! domains:
//! - Name-keyed identifiers for parties, accounts, companies and price lists
//! - The party type enumeration and its output field naming table
//! - Port error types and the notification port
//! - Ordered fallback resolution and calendar-day arithmetic
//! - Localized user-visible messages

pub mod calendar;
pub mod error;
pub mod fallback;
pub mod identifiers;
pub mod messages;
pub mod party_type;
pub mod ports;

pub use calendar::{DateCalendar, GregorianCalendar};
pub use error::CoreError;
pub use fallback::{FallbackChain, Resolved};
pub use identifiers::{
    AccountName, AddressName, CompanyName, ContactName, CorrelationId, CurrencyCode,
    CustomerGroupName, PartyName, PriceListName, UserId,
};
pub use messages::{LocalizedMessage, Messages};
pub use party_type::{PartyFieldNames, PartyType};
pub use ports::{DomainPort, NotificationSink, OperationMetadata, PortError};
