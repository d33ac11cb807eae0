//! Transaction entity

use chrono::{DateTime, Utc};
use core_kernel::{Amount, MonthKey, ServiceId, TransactionId};
use serde::{Deserialize, Serialize};

/// Aggregate payment status of a transaction
///
/// PAID is terminal and requires every participant to be PAID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Paid,
}

/// One billing cycle for one service in one calendar month
///
/// At most one transaction exists per (service, month) pair. The share
/// amounts of its participants are fixed at creation time and never
/// recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// The billed service
    pub service_id: ServiceId,
    /// Billing month
    pub month: MonthKey,
    /// Total bill amount in minor units
    pub total_amount: Amount,
    /// Aggregate status
    pub status: TransactionStatus,
    /// When every participant finished paying
    pub paid_at: Option<DateTime<Utc>>,
    /// Human-readable description
    pub description: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a new pending transaction
    pub fn new(
        service_id: ServiceId,
        month: MonthKey,
        total_amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new_v7(),
            service_id,
            month,
            total_amount,
            status: TransactionStatus::Pending,
            paid_at: None,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Returns true if the transaction reached its terminal state
    pub fn is_paid(&self) -> bool {
        self.status == TransactionStatus::Paid
    }

    /// Marks the transaction fully paid, stamping the timestamp once
    pub fn mark_paid(&mut self, now: DateTime<Utc>) {
        if self.status == TransactionStatus::Pending {
            self.status = TransactionStatus::Paid;
            self.paid_at = Some(now);
        }
    }
}
