//! Integration tests for domain_billing

use chrono::NaiveDate;

use core_kernel::ports::mock::RecordingNotifier;
use core_kernel::{AccountName, CompanyName, GregorianCalendar, Messages, PartyName, PartyType};

use domain_billing::ports::mock::{MockCreditTerms, MockLedgerPort};
use domain_billing::{Account, AccountResolver, DueDateResolver, LedgerError, LedgerPort};

use test_utils::fixtures::CompanyFixtures;

// ============================================================================
// Account Resolution Tests
// ============================================================================

mod account_resolution_tests {
    use super::*;

    #[test]
    fn test_account_creation_is_idempotent() {
        let ledger = MockLedgerPort::new().with_company(CompanyFixtures::standard());
        let notifier = RecordingNotifier::new();
        let messages = Messages::default();
        let resolver = AccountResolver::new(&ledger, &notifier, &messages);
        let company = CompanyName::new("C");
        let party = PartyName::new("Acme");

        let first = resolver
            .resolve_account(Some(&company), Some(&party), PartyType::Customer)
            .unwrap()
            .unwrap();
        let second = resolver
            .resolve_account(Some(&company), Some(&party), PartyType::Customer)
            .unwrap()
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name.as_str(), "Acme - C");
        assert_eq!(first.parent_account, Some(AccountName::new("Debtors - C")));
        assert_eq!(ledger.accounts().len(), 1);
        assert_eq!(notifier.messages(), vec!["Account Created: Acme - C".to_string()]);
    }

    #[test]
    fn test_existing_linked_account_is_returned_unchanged() {
        let existing = Account::new("Acme Receivable", "Acme Receivable", "C")
            .with_master(PartyType::Customer, "Acme")
            .with_credit_days(14);
        let ledger = MockLedgerPort::new()
            .with_company(CompanyFixtures::standard())
            .with_account(existing.clone());
        let notifier = RecordingNotifier::new();
        let messages = Messages::default();
        let resolver = AccountResolver::new(&ledger, &notifier, &messages);

        let account = resolver
            .resolve_account(Some(&CompanyName::new("C")), Some(&PartyName::new("Acme")), PartyType::Customer)
            .unwrap();

        assert_eq!(account, Some(existing));
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn test_same_party_name_per_type_gets_separate_lookups() {
        let ledger = MockLedgerPort::new()
            .with_company(CompanyFixtures::standard())
            .with_account(Account::new("Acme - C", "Acme", "C").with_master(PartyType::Supplier, "Acme"));
        let notifier = RecordingNotifier::new();
        let messages = Messages::default();
        let resolver = AccountResolver::new(&ledger, &notifier, &messages);

        // The supplier account already holds the generated name.
        let customer = resolver
            .resolve_account(Some(&CompanyName::new("C")), Some(&PartyName::new("Acme")), PartyType::Customer)
            .unwrap();

        assert!(customer.is_none());
        assert_eq!(ledger.accounts().len(), 1);
    }

    #[test]
    fn test_lead_account_created_under_payables() {
        let ledger = MockLedgerPort::new().with_company(CompanyFixtures::standard());
        let notifier = RecordingNotifier::new();
        let messages = Messages::default();
        let resolver = AccountResolver::new(&ledger, &notifier, &messages);

        let account = resolver
            .resolve_account(Some(&CompanyName::new("C")), Some(&PartyName::new("Initech")), PartyType::Lead)
            .unwrap()
            .unwrap();

        assert_eq!(account.parent_account, Some(AccountName::new("Creditors - C")));
        assert_eq!(account.master_type, Some(PartyType::Lead));
    }

    #[test]
    fn test_concurrent_resolutions_create_one_account() {
        let ledger = MockLedgerPort::new().with_company(CompanyFixtures::standard());
        let notifier = RecordingNotifier::new();
        let messages = Messages::default();
        let company = CompanyName::new("C");
        let party = PartyName::new("Acme");

        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        AccountResolver::new(&ledger, &notifier, &messages)
                            .resolve_account(Some(&company), Some(&party), PartyType::Customer)
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(ledger.accounts().len(), 1);
        assert_eq!(notifier.messages().len(), 1);
        for result in results {
            let account = result.unwrap().unwrap();
            assert_eq!(account.name.as_str(), "Acme - C");
        }
    }

    #[test]
    fn test_company_required_is_validation() {
        let ledger = MockLedgerPort::new();
        let notifier = RecordingNotifier::new();
        let messages = Messages::for_locale("de-DE");
        let resolver = AccountResolver::new(&ledger, &notifier, &messages);

        let error = resolver
            .resolve_account(None, Some(&PartyName::new("Acme")), PartyType::Supplier)
            .unwrap_err();

        assert!(error.is_validation());
        assert_eq!(messages.localize(&error), "Bitte zuerst ein Unternehmen auswählen.");
    }

    #[test]
    fn test_missing_parent_group_message_names_the_group() {
        let ledger = MockLedgerPort::new().with_company(CompanyFixtures::without_groups());
        let notifier = RecordingNotifier::new();
        let messages = Messages::default();
        let resolver = AccountResolver::new(&ledger, &notifier, &messages);

        let error = resolver
            .resolve_account(Some(&CompanyName::new("C")), Some(&PartyName::new("Globex")), PartyType::Supplier)
            .unwrap_err();

        assert!(matches!(error, LedgerError::MissingParentGroup { .. }));
        assert_eq!(
            messages.localize(&error),
            "Company C has no payables group configured."
        );
    }
}

// ============================================================================
// Due Date Tests
// ============================================================================

mod due_date_tests {
    use super::*;

    fn posting_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    #[test]
    fn test_precedence_account_party_company() {
        let ledger = MockLedgerPort::new()
            .with_company(CompanyFixtures::standard().with_credit_days(3))
            .with_account(
                Account::new("Acme - C", "Acme", "C")
                    .with_master(PartyType::Customer, "Acme")
                    .with_credit_days(10),
            );
        let terms = MockCreditTerms::new().with_party(PartyType::Customer, "Acme", 5);
        let resolver = DueDateResolver::new(&ledger, &terms, &GregorianCalendar);
        let party = PartyName::new("Acme");
        let company = CompanyName::new("C");

        let with_account = resolver
            .resolve_due_date(
                Some(posting_date()),
                Some(&party),
                PartyType::Customer,
                Some(&AccountName::new("Acme - C")),
                Some(&company),
            )
            .unwrap();
        let without_account = resolver
            .resolve_due_date(Some(posting_date()), Some(&party), PartyType::Customer, None, Some(&company))
            .unwrap();

        assert_eq!(with_account, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(without_account, NaiveDate::from_ymd_opt(2024, 2, 25));
    }

    #[test]
    fn test_unknown_account_falls_through() {
        let ledger = MockLedgerPort::new().with_company(CompanyFixtures::standard().with_credit_days(3));
        let terms = MockCreditTerms::new();
        let resolver = DueDateResolver::new(&ledger, &terms, &GregorianCalendar);

        let due = resolver
            .resolve_due_date(
                Some(posting_date()),
                None,
                PartyType::Supplier,
                Some(&AccountName::new("Unknown - C")),
                Some(&CompanyName::new("C")),
            )
            .unwrap();

        assert_eq!(due, NaiveDate::from_ymd_opt(2024, 2, 23));
    }

    #[test]
    fn test_resolver_accepts_created_accounts() {
        let ledger = MockLedgerPort::new().with_company(CompanyFixtures::standard());
        let notifier = RecordingNotifier::new();
        let messages = Messages::default();
        let account = AccountResolver::new(&ledger, &notifier, &messages)
            .resolve_account(Some(&CompanyName::new("C")), Some(&PartyName::new("Acme")), PartyType::Customer)
            .unwrap()
            .unwrap();

        assert!(ledger.get_account(&account.name).unwrap().is_some());
        assert_eq!(account.credit_days(), None);
    }
}
