//! Unpaid statements
//!
//! A statement lists everything a member still owes: their PENDING
//! participant shares plus any negative balance carried as debt.

use core_kernel::{Amount, CoreError, MemberId, MonthKey, ParticipantId, TransactionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::member::Member;

/// One unpaid participant share on a member's statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnpaidItem {
    /// The pending participant row
    pub participant_id: ParticipantId,
    /// The transaction the share belongs to
    pub transaction_id: TransactionId,
    /// The member's share of the bill
    pub share_amount: Amount,
    /// Billing month
    pub month: MonthKey,
    /// Display name of the billed service
    pub service_name: String,
    /// The transaction's total amount
    pub transaction_total: Amount,
}

/// A member's unpaid summary
///
/// `total_owed = pending_total + max(0, -balance)`. Settlement only debits
/// a balance that covers the share, so a negative balance always originates
/// from imported debt at member creation and is never also represented by a
/// PENDING participant row; each unit of debt is counted exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnpaidStatement {
    pub member_id: MemberId,
    pub member_name: String,
    pub balance: Amount,
    pub last_deposit_at: Option<DateTime<Utc>>,
    /// Pending shares, oldest first
    pub items: Vec<UnpaidItem>,
    /// Sum of pending share amounts
    pub pending_total: Amount,
    /// Debt folded in from a negative balance
    pub debt_carried: Amount,
    /// Everything the member still owes
    pub total_owed: Amount,
}

impl UnpaidStatement {
    /// Compiles a statement from a member and their pending shares
    pub fn compile(member: &Member, items: Vec<UnpaidItem>) -> Result<Self, CoreError> {
        let mut pending_total = Amount::ZERO;
        for item in &items {
            pending_total = pending_total.checked_add(item.share_amount)?;
        }

        let debt_carried = member.balance.carried_debt();
        let total_owed = pending_total.checked_add(debt_carried)?;

        Ok(Self {
            member_id: member.id,
            member_name: member.name.clone(),
            balance: member.balance,
            last_deposit_at: member.last_deposit_at,
            items,
            pending_total,
            debt_carried,
            total_owed,
        })
    }

    /// Returns true if the member owes nothing
    pub fn is_settled(&self) -> bool {
        self.total_owed.is_zero()
    }
}
