//! Test World
//!
//! Collects records into the in-memory mock ports and wires them into a
//! `PartyDetailsService`. The resulting harness keeps handles on the ledger
//! and the notifier so tests can observe account creation.

use std::sync::Arc;

use core_kernel::ports::mock::RecordingNotifier;
use core_kernel::{Messages, NotificationSink};
use domain_billing::ports::mock::MockLedgerPort;
use domain_billing::{Account, Company, LedgerPort};
use domain_party::{
    Address, Contact, CustomerGroup, DerivedPartyProfile, MockPartyPort, MockPermissionPort, Party,
    PartyDetailsError, PartyDetailsRequest, PartyDetailsService, PartyPort, PermissionPort, PriceList,
    ResolutionContext,
};

use crate::fixtures::{CompanyFixtures, PricingFixtures};

/// Actor used by [`TestHarness::resolve`]
pub const TEST_ACTOR: &str = "tester";

/// Records to load into the mock ports
pub struct TestWorld {
    ledger: MockLedgerPort,
    parties: MockPartyPort,
    permissions: MockPermissionPort,
    messages: Messages,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// A world with the standard company, the standard price lists, the
    /// "Commercial" customer group, and every read permitted
    pub fn new() -> Self {
        let parties = PricingFixtures::all_price_lists()
            .into_iter()
            .fold(MockPartyPort::new(), MockPartyPort::with_price_list)
            .with_customer_group(PricingFixtures::commercial_group());
        Self {
            ledger: MockLedgerPort::new().with_company(CompanyFixtures::standard()),
            parties,
            permissions: MockPermissionPort::allow_all(),
            messages: Messages::default(),
        }
    }

    /// A world with no records and no permissions
    pub fn empty() -> Self {
        Self {
            ledger: MockLedgerPort::new(),
            parties: MockPartyPort::new(),
            permissions: MockPermissionPort::new(),
            messages: Messages::default(),
        }
    }

    pub fn with_company(mut self, company: Company) -> Self {
        self.ledger = self.ledger.with_company(company);
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.ledger = self.ledger.with_account(account);
        self
    }

    pub fn with_party(mut self, party: Party) -> Self {
        self.parties = self.parties.with_party(party);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.parties = self.parties.with_address(address);
        self
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.parties = self.parties.with_contact(contact);
        self
    }

    pub fn with_customer_group(mut self, group: CustomerGroup) -> Self {
        self.parties = self.parties.with_customer_group(group);
        self
    }

    pub fn with_price_list(mut self, price_list: PriceList) -> Self {
        self.parties = self.parties.with_price_list(price_list);
        self
    }

    /// Replaces the permission table
    pub fn with_permissions(mut self, permissions: MockPermissionPort) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Wires the records into a service
    pub fn build(self) -> TestHarness {
        let ledger = Arc::new(self.ledger);
        let notifier = Arc::new(RecordingNotifier::new());
        let ledger_port: Arc<dyn LedgerPort> = ledger.clone();
        let notifier_sink: Arc<dyn NotificationSink> = notifier.clone();
        let parties: Arc<dyn PartyPort> = Arc::new(self.parties);
        let permissions: Arc<dyn PermissionPort> = Arc::new(self.permissions);

        let service = PartyDetailsService::new(ledger_port, parties, permissions, notifier_sink)
            .with_messages(self.messages);

        TestHarness { service, ledger, notifier }
    }
}

/// A wired service plus handles for observing its side effects
pub struct TestHarness {
    pub service: PartyDetailsService,
    pub ledger: Arc<MockLedgerPort>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHarness {
    /// Resolves as [`TEST_ACTOR`] without restrictions
    pub fn resolve(&self, request: &PartyDetailsRequest) -> Result<DerivedPartyProfile, PartyDetailsError> {
        self.service.get_party_details(request, &ResolutionContext::new(TEST_ACTOR))
    }

    pub fn resolve_as(
        &self,
        request: &PartyDetailsRequest,
        context: &ResolutionContext,
    ) -> Result<DerivedPartyProfile, PartyDetailsError> {
        self.service.get_party_details(request, context)
    }

    /// Resolves and serializes the profile, panicking on failure
    pub fn resolve_json(&self, request: &PartyDetailsRequest) -> serde_json::Value {
        let profile = self
            .resolve(request)
            .unwrap_or_else(|e| panic!("resolution failed: {}", e));
        serde_json::to_value(&profile).expect("profile serializes")
    }

    /// Notices delivered so far
    pub fn notices(&self) -> Vec<String> {
        self.notifier.messages()
    }
}
