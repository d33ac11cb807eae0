//! Billing storage port
//!
//! The billing, settlement, and reversal engines share one port: they
//! operate over the same transaction/participant state and the member
//! balances. The storage collaborator guarantees that everything an engine
//! does through one `&mut` borrow of the port commits or rolls back as a
//! unit.

use core_kernel::{MemberId, MonthKey, ParticipantId, ServiceId, TransactionId};
use domain_member::Member;
use domain_roster::Service;

use crate::participant::Participant;
use crate::transaction::Transaction;

/// Storage operations the billing engines require
pub trait BillingStore {
    /// Looks up a service by id
    fn service(&self, id: ServiceId) -> Option<&Service>;

    /// Members with an active subscription to the service, in subscription
    /// creation order
    fn active_subscribers(&self, service: ServiceId) -> Vec<MemberId>;

    /// Looks up a member by id
    fn member(&self, id: MemberId) -> Option<&Member>;

    /// Mutable member access (settlement debits, reversal credits)
    fn member_mut(&mut self, id: MemberId) -> Option<&mut Member>;

    /// Looks up a transaction by id
    fn transaction(&self, id: TransactionId) -> Option<&Transaction>;

    /// Mutable transaction access
    fn transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction>;

    /// The transaction for a (service, month) pair, if any
    fn transaction_for(&self, service: ServiceId, month: MonthKey) -> Option<&Transaction>;

    /// All transactions, newest first
    fn transactions(&self) -> Vec<&Transaction>;

    /// Inserts a transaction together with all of its participants
    fn insert_transaction(&mut self, transaction: Transaction, participants: Vec<Participant>);

    /// Removes a transaction and cascade-deletes its participant rows
    fn remove_transaction(&mut self, id: TransactionId);

    /// Participants of a transaction in creation order
    fn participants_of(&self, transaction: TransactionId) -> Vec<&Participant>;

    /// Mutable participant access
    fn participant_mut(&mut self, id: ParticipantId) -> Option<&mut Participant>;
}
