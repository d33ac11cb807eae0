//! Participant entity (Transaction x Member join)

use chrono::{DateTime, Utc};
use core_kernel::{Amount, MemberId, ParticipantId, TransactionId};
use serde::{Deserialize, Serialize};

/// Payment status of a single participant
///
/// PAID is terminal for the settlement engine; only a full transaction
/// reversal removes the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

/// One member's share of one transaction
///
/// Created atomically with its transaction, one per active subscriber at
/// creation time, and cascade-deleted with it. Never created independently
/// after the fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier
    pub id: ParticipantId,
    /// Owning transaction
    pub transaction_id: TransactionId,
    /// The paying member
    pub member_id: MemberId,
    /// This member's portion of the total, fixed at creation time
    pub share_amount: Amount,
    /// Payment status
    pub status: PaymentStatus,
    /// When the share was collected
    pub paid_at: Option<DateTime<Utc>>,
}

impl Participant {
    /// Creates a new pending participant
    pub fn new(transaction_id: TransactionId, member_id: MemberId, share_amount: Amount) -> Self {
        Self {
            id: ParticipantId::new_v7(),
            transaction_id,
            member_id,
            share_amount,
            status: PaymentStatus::Pending,
            paid_at: None,
        }
    }

    /// Returns true if the share has been collected
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    /// Marks the share collected, stamping the timestamp once
    pub fn mark_paid(&mut self, now: DateTime<Utc>) {
        if self.status == PaymentStatus::Pending {
            self.status = PaymentStatus::Paid;
            self.paid_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant_is_pending() {
        let p = Participant::new(TransactionId::new(), MemberId::new(), Amount::new(2649));
        assert!(!p.is_paid());
        assert!(p.paid_at.is_none());
    }

    #[test]
    fn test_mark_paid_is_terminal() {
        let mut p = Participant::new(TransactionId::new(), MemberId::new(), Amount::new(50));

        p.mark_paid(Utc::now());
        let stamp = p.paid_at;
        assert!(p.is_paid());

        p.mark_paid(Utc::now());
        assert_eq!(p.paid_at, stamp);
    }
}
