//! Party domain errors
//!
//! This module defines the errors a party profile resolution can end with.
//! Every variant renders a localized message through [`Messages`].

use thiserror::Error;

use core_kernel::{CoreError, LocalizedMessage, Messages, PartyName, PartyType, PortError, UserId};
use domain_billing::LedgerError;

/// Errors that can occur while resolving party details
#[derive(Debug, Error)]
pub enum PartyDetailsError {
    /// Neither a party nor an account bound to one was given
    #[error("A {party_type} is required")]
    PartyRequired { party_type: PartyType },

    /// The actor may not read the party
    #[error("Not permitted: {actor} cannot read {party_type} {party}")]
    PermissionDenied {
        actor: UserId,
        party_type: PartyType,
        party: PartyName,
    },

    /// Account or due date resolution failed
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A record store failed or a record is missing
    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PartyDetailsError {
    /// Returns true if the request lacked required context
    pub fn is_validation(&self) -> bool {
        match self {
            PartyDetailsError::PartyRequired { .. } | PartyDetailsError::Core(_) => true,
            PartyDetailsError::Ledger(error) => error.is_validation(),
            _ => false,
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, PartyDetailsError::PermissionDenied { .. })
    }

    /// Renders the error for the user
    pub fn localized(&self, messages: &Messages) -> String {
        messages.localize(self)
    }
}

impl LocalizedMessage for PartyDetailsError {
    fn message_id(&self) -> &'static str {
        match self {
            PartyDetailsError::PartyRequired { .. } => "party-required",
            PartyDetailsError::PermissionDenied { .. } => "not-permitted",
            PartyDetailsError::Ledger(error) => error.message_id(),
            PartyDetailsError::Port(error) => error.message_id(),
            PartyDetailsError::Core(error) => error.message_id(),
        }
    }

    fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            PartyDetailsError::PartyRequired { party_type } => {
                vec![("party_type", party_type.to_string())]
            }
            PartyDetailsError::PermissionDenied { party_type, party, .. } => vec![
                ("party_type", party_type.to_string()),
                ("party", party.to_string()),
            ],
            PartyDetailsError::Ledger(error) => error.message_args(),
            PartyDetailsError::Port(error) => error.message_args(),
            PartyDetailsError::Core(error) => error.message_args(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_message() {
        let error = PartyDetailsError::PermissionDenied {
            actor: UserId::new("bob"),
            party_type: PartyType::Customer,
            party: PartyName::new("Acme"),
        };

        assert!(error.is_permission_denied());
        assert!(!error.is_validation());
        assert_eq!(
            error.localized(&Messages::default()),
            "Not permitted: you cannot read Customer Acme."
        );
    }

    #[test]
    fn test_ledger_validation_is_validation() {
        let error = PartyDetailsError::from(LedgerError::CompanyRequired {
            party: PartyName::new("Acme"),
            party_type: PartyType::Customer,
        });

        assert!(error.is_validation());
        assert_eq!(error.localized(&Messages::default()), "Please select company first.");
    }

    #[test]
    fn test_party_required_message() {
        let error = PartyDetailsError::PartyRequired { party_type: PartyType::Supplier };
        assert_eq!(error.localized(&Messages::default()), "Please select a Supplier first.");
    }
}
