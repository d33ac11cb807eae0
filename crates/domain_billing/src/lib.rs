//! Billing Domain - Bill Splitting, Settlement, and Reversal
//!
//! This crate implements the settlement/ledger engine of the pool:
//!
//! - **Billing**: creates one transaction per (service, month), splitting
//!   the bill across the service's currently active subscribers with
//!   ceiling division.
//! - **Settlement**: attempts to collect each participant's share from the
//!   member ledger. Per-participant and per-transaction statuses only move
//!   PENDING → PAID, and re-running settlement never double-debits.
//! - **Reversal**: deletes a transaction, refunding already-paid shares
//!   back to member balances — the exact inverse of the original debits.
//!
//! # Invariants
//!
//! - Conservation: settlement and reversal move money between a member's
//!   balance and the pool; the sum of balances plus pending shares only
//!   changes through explicit deposits.
//! - Idempotent settlement: a PAID participant is never debited again.
//! - Atomicity: every multi-row mutation happens inside one storage unit of
//!   work supplied by the caller; a failure leaves no partial write.

pub mod billing;
pub mod participant;
pub mod ports;
pub mod queries;
pub mod reversal;
pub mod settlement;
pub mod transaction;

pub use billing::create_transaction;
pub use participant::{Participant, PaymentStatus};
pub use ports::BillingStore;
pub use queries::{list_transactions, transaction_detail, ParticipantView, TransactionDetail, TransactionFilter};
pub use reversal::{delete_transaction, Refund, RefundReport};
pub use settlement::{
    process_payments, ParticipantOutcome, PaymentOutcome, SettlementReport, SettlementSummary,
};
pub use transaction::{Transaction, TransactionStatus};
