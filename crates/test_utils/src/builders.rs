//! Test Data Builders
//!
//! Seeds a [`StoreState`] through the same domain operations production
//! code uses, so seeded state always satisfies the domain invariants.

use core_kernel::{Amount, MemberId, ServiceId};
use domain_member::create_member;
use domain_roster::{create_service, subscribe};
use infra_store::{MemoryStore, StoreState};

use crate::fixtures::{AmountFixtures, POOL_MEMBER_NAMES, POOL_SERVICES};

/// Builder for a seeded pool
///
/// Records (name, balance) and (service, members) intents, then replays
/// them against a fresh `StoreState` in `build()`.
#[derive(Default)]
pub struct PoolBuilder {
    members: Vec<(String, Amount)>,
    services: Vec<(String, String, u32)>,
    subscriptions: Vec<(String, String)>,
}

impl PoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pool resembling the production seed data: four members with mixed
    /// balances, three services, everyone on spotify, half on youtube.
    pub fn seeded() -> Self {
        let mut builder = Self::new();
        let balances = [
            AmountFixtures::rich_balance(),
            AmountFixtures::broke_balance(),
            AmountFixtures::deposit(),
            AmountFixtures::imported_debt(),
        ];
        for (name, balance) in POOL_MEMBER_NAMES.iter().zip(balances) {
            builder = builder.with_member(name, balance);
        }
        for (name, display_name, capacity) in POOL_SERVICES.iter() {
            builder = builder.with_service(name, display_name, *capacity);
        }
        for name in POOL_MEMBER_NAMES.iter() {
            builder = builder.with_subscription(name, "spotify");
        }
        for name in POOL_MEMBER_NAMES.iter().take(2) {
            builder = builder.with_subscription(name, "youtube");
        }
        builder
    }

    pub fn with_member(mut self, name: &str, balance: Amount) -> Self {
        self.members.push((name.to_string(), balance));
        self
    }

    pub fn with_service(mut self, name: &str, display_name: &str, max_members: u32) -> Self {
        self.services
            .push((name.to_string(), display_name.to_string(), max_members));
        self
    }

    /// Subscribes a member (by name) to a service (by short name); both must
    /// have been added to the builder first
    pub fn with_subscription(mut self, member: &str, service: &str) -> Self {
        self.subscriptions
            .push((member.to_string(), service.to_string()));
        self
    }

    /// Replays the recorded intents into a fresh state
    ///
    /// # Panics
    ///
    /// Panics when an intent violates a domain rule; a broken seed is a
    /// test bug.
    pub fn build(self) -> SeededPool {
        let mut state = StoreState::new();
        let mut member_ids = Vec::new();
        let mut service_ids = Vec::new();

        for (name, balance) in &self.members {
            let member = create_member(&mut state, name, *balance)
                .unwrap_or_else(|e| panic!("seed member {name}: {e}"));
            member_ids.push((name.clone(), member.id));
        }
        for (name, display_name, max_members) in &self.services {
            let service = create_service(&mut state, name, display_name, *max_members)
                .unwrap_or_else(|e| panic!("seed service {name}: {e}"));
            service_ids.push((name.clone(), service.id));
        }
        for (member, service) in &self.subscriptions {
            let member_id = lookup(&member_ids, member);
            let service_id = lookup(&service_ids, service);
            subscribe(&mut state, member_id, service_id)
                .unwrap_or_else(|e| panic!("seed subscription {member}/{service}: {e}"));
        }

        SeededPool {
            state,
            member_ids,
            service_ids,
        }
    }

    /// Builds and wraps the state in a store, for async tests
    pub fn build_store(self) -> (MemoryStore, SeededPool) {
        let pool = self.build();
        (MemoryStore::with_state(pool.state.clone()), pool)
    }
}

fn lookup<Id: Copy>(pairs: &[(String, Id)], name: &str) -> Id {
    pairs
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, id)| *id)
        .unwrap_or_else(|| panic!("unknown seed name {name}"))
}

/// A built pool with name → id lookups for assertions
pub struct SeededPool {
    pub state: StoreState,
    member_ids: Vec<(String, MemberId)>,
    service_ids: Vec<(String, ServiceId)>,
}

impl SeededPool {
    pub fn member_id(&self, name: &str) -> MemberId {
        lookup(&self.member_ids, name)
    }

    pub fn service_id(&self, name: &str) -> ServiceId {
        lookup(&self.service_ids, name)
    }
}
