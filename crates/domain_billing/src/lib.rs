//! Ledger Domain - Party Accounts and Due Dates
//!
//! This crate resolves the ledger side of a party profile: the account a
//! party posts against in a company, and the due date of a document posted
//! for that party.
//!
//! # Party Accounts
//!
//! Each (party, party type, company) triple has at most one linked account.
//! It is created on first use as a ledger account under the company's
//! receivables group (customers) or payables group (suppliers and leads).
//!
//! # Due Dates
//!
//! Credit days are taken from the first of account, party and company that
//! has a positive value, and added to the posting date.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{AccountResolver, DueDateResolver};
//!
//! let accounts = AccountResolver::new(&ledger, &notifier, &messages);
//! let account = accounts.resolve_account(Some(&company), Some(&party), PartyType::Customer)?;
//!
//! let due_dates = DueDateResolver::new(&ledger, &terms, &GregorianCalendar);
//! let due = due_dates.resolve_due_date(Some(posting_date), Some(&party), PartyType::Customer, None, Some(&company))?;
//! ```

pub mod account;
pub mod due_date;
pub mod error;
pub mod ports;
pub mod resolver;

pub use account::{Account, AccountKind, Company, NewAccount};
pub use due_date::DueDateResolver;
pub use error::LedgerError;
pub use ports::{CreditTermsPort, LedgerPort, LedgerPortExt};
pub use resolver::AccountResolver;
