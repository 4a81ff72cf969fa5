//! Ledger domain errors

use thiserror::Error;

use core_kernel::{CompanyName, CoreError, LocalizedMessage, PartyName, PartyType, PortError};

/// Errors that can occur while resolving party accounts and due dates
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A party was given without the company its account belongs to
    #[error("Company is required to resolve the account of {party_type} {party}")]
    CompanyRequired {
        party: PartyName,
        party_type: PartyType,
    },

    /// The company has no group to create the party account under
    #[error("Company {company} has no parent group for {party_type} accounts")]
    MissingParentGroup {
        company: CompanyName,
        party_type: PartyType,
    },

    /// The ledger store failed
    #[error(transparent)]
    Port(#[from] PortError),

    /// Date arithmetic or another kernel operation failed
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl LedgerError {
    /// Returns true if the error was caused by missing or invalid input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::CompanyRequired { .. }
                | LedgerError::MissingParentGroup { .. }
                | LedgerError::Core(_)
        )
    }
}

impl LocalizedMessage for LedgerError {
    fn message_id(&self) -> &'static str {
        match self {
            LedgerError::CompanyRequired { .. } => "company-required",
            LedgerError::MissingParentGroup { .. } => "missing-parent-group",
            LedgerError::Port(error) => error.message_id(),
            LedgerError::Core(error) => error.message_id(),
        }
    }

    fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            LedgerError::CompanyRequired { .. } => vec![],
            LedgerError::MissingParentGroup { company, party_type } => {
                let group = if party_type.is_receivable() { "receivables" } else { "payables" };
                vec![("company", company.to_string()), ("group", group.to_string())]
            }
            LedgerError::Port(error) => error.message_args(),
            LedgerError::Core(error) => error.message_args(),
        }
    }
}
