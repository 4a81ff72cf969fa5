//! Integration tests for party details resolution

use rust_decimal_macros::dec;
use serde_json::json;

use core_kernel::{AccountName, CompanyName, Messages, PartyName, PartyType, PriceListName};
use domain_billing::{Account, LedgerPort};
use domain_party::{
    AccessRestrictions, MockPermissionPort, PartyDetailsRequest, ResolutionContext, Restriction,
};
use test_utils::{
    assert_has_key, assert_key_str, assert_no_key, assert_permission_denied, assert_validation_error,
    AccountFixtures, AddressBuilder, CompanyFixtures, ContactBuilder, DateFixtures, PartyBuilder,
    TestWorld,
};

// ============================================================================
// Account and Due Date Tests
// ============================================================================

mod account_and_due_date_tests {
    use super::*;

    #[test]
    fn test_without_posting_date_no_account_is_resolved() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").with_credit_days(30).build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme").with_company("C");

        let profile = harness.resolve(&request).unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(profile.due_date(), None);
        assert!(harness.ledger.accounts().is_empty());
        assert!(harness.notices().is_empty());
        assert_key_str(&json, "customer", "Acme");
        assert_no_key(&json, "debit_to");
        assert_no_key(&json, "due_date");
    }

    #[test]
    fn test_customer_account_created_once() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date());

        let first = harness.resolve_json(&request);
        let second = harness.resolve_json(&request);

        assert_key_str(&first, "debit_to", "Acme - C");
        assert_key_str(&second, "debit_to", "Acme - C");
        assert_eq!(harness.ledger.accounts().len(), 1);
        assert_eq!(harness.notices(), vec!["Account Created: Acme - C".to_string()]);
    }

    #[test]
    fn test_account_creation_notice_is_localized() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::supplier("Globex").build())
            .with_messages(Messages::for_locale("de-DE"))
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Supplier, "Globex")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date());

        harness.resolve(&request).unwrap();

        assert_eq!(harness.notices(), vec!["Konto angelegt: Globex - C".to_string()]);
    }

    #[test]
    fn test_due_date_precedence() {
        let account = AccountFixtures::linked(PartyType::Customer, "Acme").with_credit_days(10);
        let harness = TestWorld::empty()
            .with_company(CompanyFixtures::standard().with_credit_days(3))
            .with_account(account)
            .with_party(PartyBuilder::customer("Acme").with_credit_days(5).build())
            .with_party(PartyBuilder::customer("Beta").with_credit_days(5).build())
            .with_party(PartyBuilder::supplier("Gamma").build())
            .with_permissions(MockPermissionPort::allow_all())
            .build();
        let request = |party: &str, party_type| {
            PartyDetailsRequest::for_party(party_type, party)
                .with_company("C")
                .with_posting_date(DateFixtures::posting_date())
        };

        let acme = harness.resolve(&request("Acme", PartyType::Customer)).unwrap();
        let beta = harness.resolve(&request("Beta", PartyType::Customer)).unwrap();
        let gamma = harness.resolve(&request("Gamma", PartyType::Supplier)).unwrap();

        assert_eq!(acme.due_date(), Some(DateFixtures::posting_date_plus(10)));
        // Beta's account is created without credit days, so the party's own apply.
        assert_eq!(beta.due_date(), Some(DateFixtures::posting_date_plus(5)));
        assert_eq!(gamma.due_date(), Some(DateFixtures::posting_date_plus(3)));
    }

    #[test]
    fn test_due_date_defaults_to_posting_date() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::lead("L-1").build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Lead, "L-1")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date());

        let json = harness.resolve_json(&request);

        assert_eq!(json["due_date"], json!("2024-01-15"));
        assert_key_str(&json, "credit_to", "L-1 - C");
    }

    #[test]
    fn test_account_only_request_derives_party() {
        let account = AccountFixtures::linked(PartyType::Supplier, "Globex").with_credit_days(7);
        let harness = TestWorld::new()
            .with_account(account)
            .with_party(PartyBuilder::supplier("Globex").build())
            .build();
        let request = PartyDetailsRequest::new(PartyType::Supplier)
            .with_account("Globex - C")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date());

        let profile = harness.resolve(&request).unwrap();

        assert_eq!(profile.party, PartyName::new("Globex"));
        assert_eq!(profile.account(), Some(&AccountName::new("Globex - C")));
        assert_eq!(profile.due_date(), Some(DateFixtures::posting_date_plus(7)));
        assert_eq!(harness.ledger.accounts().len(), 1);
        assert!(harness.notices().is_empty());
    }

    #[test]
    fn test_unlinked_account_name_is_not_relinked() {
        let harness = TestWorld::new()
            .with_account(Account::new("Acme - C", "Acme", "C"))
            .with_party(PartyBuilder::customer("Acme").build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date());

        let json = harness.resolve_json(&request);

        assert_has_key(&json, "debit_to");
        assert_eq!(json["debit_to"], json!(null));
        let stored = harness.ledger.get_account(&AccountName::new("Acme - C")).unwrap().unwrap();
        assert_eq!(stored.master_name, None);
    }

    #[test]
    fn test_missing_company_is_validation_error() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme")
            .with_company("   ")
            .with_posting_date(DateFixtures::posting_date());

        let result = harness.resolve(&request);

        assert!(result
            .as_ref()
            .is_err_and(|e| e.localized(harness.service.messages()) == "Please select company first."));
        assert_validation_error(result);
    }

    #[test]
    fn test_no_party_at_all_is_validation_error() {
        let harness = TestWorld::new().build();
        let request = PartyDetailsRequest::new(PartyType::Customer).with_company("C");

        assert_validation_error(harness.resolve(&request));
    }

    #[test]
    fn test_blank_fields_in_document_request_count_as_absent() {
        let harness = TestWorld::new().build();
        let request: PartyDetailsRequest = serde_json::from_value(json!({
            "party": "",
            "account": "",
            "party_type": "Customer",
            "company": "C",
            "posting_date": "2024-01-15",
        }))
        .unwrap();

        assert_validation_error(harness.resolve(&request));
        assert!(harness.ledger.accounts().is_empty());
        assert!(harness.notifier.messages().is_empty());
    }

    #[test]
    fn test_unknown_party_is_not_found() {
        let harness = TestWorld::new().build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Ghost");

        let error = harness.resolve(&request).unwrap_err();

        assert!(!error.is_validation());
        assert_eq!(error.localized(&Messages::default()), "Customer Ghost not found.");
    }
}

// ============================================================================
// Permission Tests
// ============================================================================

mod permission_tests {
    use super::*;

    #[test]
    fn test_denied_actor_gets_no_profile() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").build())
            .with_permissions(MockPermissionPort::new().with_grant("alice", PartyType::Customer, "Acme"))
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme");

        assert_permission_denied(harness.resolve_as(&request, &ResolutionContext::new("bob")));
        assert!(harness.resolve_as(&request, &ResolutionContext::new("alice")).is_ok());
    }

    #[test]
    fn test_permission_checked_after_account_resolution() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").build())
            .with_permissions(MockPermissionPort::new())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date());

        assert_permission_denied(harness.resolve(&request));
        // An account created before the failing step stays.
        assert_eq!(harness.ledger.accounts().len(), 1);
    }

    #[test]
    fn test_ignore_permissions_bypasses_check() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::supplier("Globex").build())
            .with_permissions(MockPermissionPort::new())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Supplier, "Globex").ignoring_permissions();

        assert!(harness.resolve(&request).is_ok());
    }
}

// ============================================================================
// Address and Contact Tests
// ============================================================================

mod address_and_contact_tests {
    use super::*;

    #[test]
    fn test_customer_addresses_and_contact() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").build())
            .with_address(AddressBuilder::new("Acme-Billing", PartyType::Customer, "Acme").primary().build())
            .with_address(
                AddressBuilder::new("Acme-Warehouse", PartyType::Customer, "Acme")
                    .with_line1("7 Dock Rd")
                    .shipping()
                    .build(),
            )
            .with_contact(
                ContactBuilder::new("Jane-Acme", PartyType::Customer, "Acme")
                    .with_full_name("Jane", "Doe")
                    .with_email("jane@acme.test")
                    .with_phone("555-0100", "555-0199")
                    .with_role("Buyer", "Purchasing")
                    .primary()
                    .build(),
            )
            .build();

        let json = harness.resolve_json(&PartyDetailsRequest::for_party(PartyType::Customer, "Acme"));

        assert_key_str(&json, "customer_address", "Acme-Billing");
        assert_key_str(&json, "address_display", "Acme Street 1\nSpringfield\nUnited States");
        assert_key_str(&json, "shipping_address_name", "Acme-Warehouse");
        assert_key_str(&json, "shipping_address", "7 Dock Rd\nSpringfield\nUnited States");
        assert_key_str(&json, "contact_person", "Jane-Acme");
        assert_key_str(&json, "contact_display", "Jane Doe");
        assert_key_str(&json, "contact_email", "jane@acme.test");
        assert_key_str(&json, "contact_mobile", "555-0199");
        assert_key_str(&json, "contact_phone", "555-0100");
        assert_key_str(&json, "contact_designation", "Buyer");
        assert_key_str(&json, "contact_department", "Purchasing");
    }

    #[test]
    fn test_lead_uses_customer_address_key() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::lead("L-1").build())
            .with_address(AddressBuilder::new("L-1-Office", PartyType::Lead, "L-1").primary().build())
            .build();

        let json = harness.resolve_json(&PartyDetailsRequest::for_party(PartyType::Lead, "L-1"));

        assert_key_str(&json, "customer_address", "L-1-Office");
        assert_no_key(&json, "lead_address");
        assert_key_str(&json, "lead", "L-1");
        assert_key_str(&json, "lead_name", "L-1 Prospect");
    }

    #[test]
    fn test_supplier_has_no_shipping_fields() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::supplier("Globex").build())
            .with_address(AddressBuilder::new("Globex-HQ", PartyType::Supplier, "Globex").primary().shipping().build())
            .build();

        let json = harness.resolve_json(&PartyDetailsRequest::for_party(PartyType::Supplier, "Globex"));

        assert_key_str(&json, "supplier_address", "Globex-HQ");
        assert_no_key(&json, "shipping_address_name");
        assert_no_key(&json, "shipping_address");
    }

    #[test]
    fn test_latest_primary_address_wins() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").build())
            .with_address(AddressBuilder::new("Old", PartyType::Customer, "Acme").primary().modified_days_ago(30).build())
            .with_address(AddressBuilder::new("New", PartyType::Customer, "Acme").primary().build())
            .with_contact(ContactBuilder::new("B", PartyType::Customer, "Acme").primary().build())
            .with_contact(ContactBuilder::new("A", PartyType::Customer, "Acme").primary().build())
            .build();

        let json = harness.resolve_json(&PartyDetailsRequest::for_party(PartyType::Customer, "Acme"));

        assert_key_str(&json, "customer_address", "New");
        assert_key_str(&json, "contact_person", "A");
    }

    #[test]
    fn test_sparse_lead_resolves() {
        let harness = TestWorld::empty()
            .with_company(CompanyFixtures::standard())
            .with_party(PartyBuilder::lead("L-2").build())
            .with_permissions(MockPermissionPort::allow_all())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Lead, "L-2")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date());

        let json = harness.resolve_json(&request);

        assert_eq!(json["customer_address"], json!(null));
        assert_eq!(json["address_display"], json!(""));
        assert_eq!(json["shipping_address"], json!(""));
        assert_no_key(&json, "shipping_address_name");
        for key in [
            "contact_person",
            "contact_display",
            "contact_email",
            "contact_mobile",
            "contact_phone",
            "contact_designation",
            "contact_department",
        ] {
            assert_has_key(&json, key);
            assert_eq!(json[key], json!(null));
        }
        assert_no_key(&json, "buying_price_list");
        assert_no_key(&json, "price_list_currency");
        assert_no_key(&json, "currency");
        assert_no_key(&json, "sales_team");
    }
}

// ============================================================================
// Price List and Defaults Tests
// ============================================================================

mod price_list_and_defaults_tests {
    use super::*;

    fn restricted_to(restriction: Restriction<PriceListName>) -> ResolutionContext {
        ResolutionContext::new("tester")
            .with_restrictions(AccessRestrictions::none().with_price_list(restriction))
    }

    #[test]
    fn test_single_restriction_wins_over_everything() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").with_price_list("Standard Buying").build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme").with_price_list("Standard Selling");

        let profile = harness
            .resolve_as(&request, &restricted_to(Restriction::Single(PriceListName::new("PL-Restricted"))))
            .unwrap();
        let json = serde_json::to_value(&profile).unwrap();

        assert_key_str(&json, "selling_price_list", "PL-Restricted");
        assert_key_str(&json, "price_list_currency", "GBP");
    }

    #[test]
    fn test_multi_valued_restriction_falls_back_to_party_default() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").with_price_list("Standard Buying").build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme");
        let context = restricted_to(Restriction::Many(vec![
            PriceListName::new("PL-Restricted"),
            PriceListName::new("Standard Selling"),
        ]));

        let json = serde_json::to_value(harness.resolve_as(&request, &context).unwrap()).unwrap();

        assert_key_str(&json, "selling_price_list", "Standard Buying");
        assert_key_str(&json, "price_list_currency", "EUR");
    }

    #[test]
    fn test_customer_group_then_requested() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::customer("Acme").build())
            .with_party(PartyBuilder::customer("Solo").with_customer_group(None).build())
            .build();

        let grouped = harness.resolve_json(
            &PartyDetailsRequest::for_party(PartyType::Customer, "Acme").with_price_list("PL-Restricted"),
        );
        let solo = harness.resolve_json(
            &PartyDetailsRequest::for_party(PartyType::Customer, "Solo").with_price_list("PL-Restricted"),
        );

        assert_key_str(&grouped, "selling_price_list", "Standard Selling");
        assert_key_str(&solo, "selling_price_list", "PL-Restricted");
    }

    #[test]
    fn test_supplier_keys() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::supplier("Globex").build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Supplier, "Globex")
            .with_company("C")
            .with_posting_date(DateFixtures::posting_date())
            .with_price_list("Standard Buying");

        let json = harness.resolve_json(&request);

        assert_key_str(&json, "buying_price_list", "Standard Buying");
        assert_key_str(&json, "credit_to", "Globex - C");
        assert_key_str(&json, "supplier_name", "Globex Corp");
        assert_key_str(&json, "supplier_type", "Services");
        assert_no_key(&json, "selling_price_list");
        assert_no_key(&json, "debit_to");
    }

    #[test]
    fn test_customer_defaults_and_sales_team() {
        let harness = TestWorld::new()
            .with_party(
                PartyBuilder::customer("Acme")
                    .with_currency("USD")
                    .with_taxes("VAT 19%")
                    .with_sales_partner("Partner Co", dec!(12.5))
                    .with_sales_person("Sam", "Account Manager")
                    .with_sales_person("Ria", "Sales Engineer")
                    .build(),
            )
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Customer, "Acme").with_currency("INR");

        let json = harness.resolve_json(&request);

        assert_key_str(&json, "customer_name", "Acme Ltd");
        assert_key_str(&json, "customer_group", "Commercial");
        assert_key_str(&json, "territory", "Domestic");
        assert_key_str(&json, "currency", "USD");
        assert_key_str(&json, "taxes_and_charges", "VAT 19%");
        assert_key_str(&json, "sales_partner", "Partner Co");
        let rate: rust_decimal::Decimal = serde_json::from_value(json["commission_rate"].clone()).unwrap();
        assert_eq!(rate, dec!(12.5));
        assert_eq!(
            json["sales_team"],
            json!([
                {"sales_person": "Sam", "sales_designation": "Account Manager"},
                {"sales_person": "Ria", "sales_designation": "Sales Engineer"},
            ])
        );
    }

    #[test]
    fn test_requested_currency_fills_gap() {
        let harness = TestWorld::new()
            .with_party(PartyBuilder::supplier("Globex").with_sales_partner("Ignored", dec!(3)).build())
            .build();
        let request = PartyDetailsRequest::for_party(PartyType::Supplier, "Globex").with_currency("INR");

        let json = harness.resolve_json(&request);

        assert_key_str(&json, "currency", "INR");
        assert_no_key(&json, "sales_partner");
        assert_no_key(&json, "commission_rate");
    }

    #[test]
    fn test_profiles_are_per_company() {
        let harness = TestWorld::new()
            .with_company(CompanyFixtures::subsidiary())
            .with_party(PartyBuilder::customer("Acme").build())
            .build();
        let request = |company: &str| {
            PartyDetailsRequest::for_party(PartyType::Customer, "Acme")
                .with_company(company)
                .with_posting_date(DateFixtures::posting_date())
        };

        let main = harness.resolve(&request("C")).unwrap();
        let sub = harness.resolve(&request("Subsidiary")).unwrap();

        assert_eq!(main.account(), Some(&AccountName::new("Acme - C")));
        assert_eq!(sub.account(), Some(&AccountName::new("Acme - SUB")));
        let sub_account = harness.ledger.get_account(&AccountName::new("Acme - SUB")).unwrap().unwrap();
        assert_eq!(sub_account.company, CompanyName::new("Subsidiary"));
        assert_eq!(harness.notices().len(), 2);
    }
}
