//! Storage state and port implementations
//!
//! `StoreState` holds every table as a plain vector in insertion order and
//! implements the storage port of each domain crate. All reads and joins
//! the engines need live here, next to the data.

use core_kernel::{MemberId, MonthKey, ParticipantId, ServiceId, TransactionId};
use domain_billing::{BillingStore, Participant, PaymentStatus, Transaction};
use domain_member::{Member, MemberStore, UnpaidItem};
use domain_roster::{RosterStore, Service, Subscription};

/// Every table of the pool, as one cloneable value
///
/// Cloning the state is what makes the unit of work in
/// [`crate::MemoryStore`] atomic: mutations run against a copy and the
/// copy replaces the original only on success.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    members: Vec<Member>,
    services: Vec<Service>,
    subscriptions: Vec<Subscription>,
    transactions: Vec<Transaction>,
    participants: Vec<Participant>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total of all member balances, for conservation checks
    pub fn total_balance(&self) -> i64 {
        self.members.iter().map(|m| m.balance.minor_units()).sum()
    }

    /// Row counts per table: (members, services, subscriptions,
    /// transactions, participants)
    pub fn row_counts(&self) -> (usize, usize, usize, usize, usize) {
        (
            self.members.len(),
            self.services.len(),
            self.subscriptions.len(),
            self.transactions.len(),
            self.participants.len(),
        )
    }
}

impl MemberStore for StoreState {
    fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn member_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    fn insert_member(&mut self, member: Member) {
        self.members.push(member);
    }

    fn members(&self) -> Vec<&Member> {
        self.members.iter().collect()
    }

    fn pending_shares(&self, member: MemberId) -> Vec<UnpaidItem> {
        let mut items: Vec<(&Transaction, UnpaidItem)> = self
            .participants
            .iter()
            .filter(|p| p.member_id == member && p.status == PaymentStatus::Pending)
            .filter_map(|p| {
                let transaction = self
                    .transactions
                    .iter()
                    .find(|t| t.id == p.transaction_id)?;
                let service_name = self
                    .services
                    .iter()
                    .find(|s| s.id == transaction.service_id)
                    .map(|s| s.display_name.clone())
                    .unwrap_or_default();
                Some((
                    transaction,
                    UnpaidItem {
                        participant_id: p.id,
                        transaction_id: transaction.id,
                        share_amount: p.share_amount,
                        month: transaction.month,
                        service_name,
                        transaction_total: transaction.total_amount,
                    },
                ))
            })
            .collect();

        items.sort_by(|(a, _), (b, _)| a.created_at.cmp(&b.created_at));
        items.into_iter().map(|(_, item)| item).collect()
    }
}

impl RosterStore for StoreState {
    fn service(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    fn service_by_name(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    fn service_mut(&mut self, id: ServiceId) -> Option<&mut Service> {
        self.services.iter_mut().find(|s| s.id == id)
    }

    fn insert_service(&mut self, service: Service) {
        self.services.push(service);
    }

    fn services(&self) -> Vec<&Service> {
        self.services.iter().collect()
    }

    fn member_exists(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    fn subscription(&self, member: MemberId, service: ServiceId) -> Option<&Subscription> {
        self.subscriptions
            .iter()
            .find(|s| s.member_id == member && s.service_id == service)
    }

    fn subscription_mut(
        &mut self,
        member: MemberId,
        service: ServiceId,
    ) -> Option<&mut Subscription> {
        self.subscriptions
            .iter_mut()
            .find(|s| s.member_id == member && s.service_id == service)
    }

    fn insert_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    fn active_subscription_count(&self, service: ServiceId) -> u32 {
        self.subscriptions
            .iter()
            .filter(|s| s.service_id == service && s.is_active())
            .count() as u32
    }

    fn subscriptions(&self) -> Vec<&Subscription> {
        let mut rows: Vec<&Subscription> = self.subscriptions.iter().collect();
        rows.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
        rows
    }
}

impl BillingStore for StoreState {
    fn service(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    fn active_subscribers(&self, service: ServiceId) -> Vec<MemberId> {
        self.subscriptions
            .iter()
            .filter(|s| s.service_id == service && s.is_active())
            .map(|s| s.member_id)
            .collect()
    }

    fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    fn transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.id == id)
    }

    fn transaction_for(&self, service: ServiceId, month: MonthKey) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|t| t.service_id == service && t.month == month)
    }

    fn transactions(&self) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = self.transactions.iter().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    fn insert_transaction(&mut self, transaction: Transaction, participants: Vec<Participant>) {
        self.transactions.push(transaction);
        self.participants.extend(participants);
    }

    fn remove_transaction(&mut self, id: TransactionId) {
        self.participants.retain(|p| p.transaction_id != id);
        self.transactions.retain(|t| t.id != id);
    }

    fn participants_of(&self, transaction: TransactionId) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.transaction_id == transaction)
            .collect()
    }

    fn participant_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }
}
