//! Reversal/deletion engine
//!
//! Undoes a transaction: refunds already-paid shares back to member
//! balances, then removes the transaction and its participant rows.

use core_kernel::{Amount, CoreError, MemberId, TransactionId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ports::BillingStore;

/// One refunded share
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Refund {
    pub member_id: MemberId,
    pub member_name: String,
    pub refunded_amount: Amount,
}

/// The result of deleting a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundReport {
    pub transaction_id: TransactionId,
    /// Members refunded, in participant order; empty when nothing was paid
    pub refunds: Vec<Refund>,
    pub total_refunded: Amount,
    pub refunded_count: usize,
}

/// Deletes a transaction, refunding collected shares
///
/// Each PAID participant's member is credited by exactly that participant's
/// share amount — the inverse of the settlement debit — then all participant
/// rows and the transaction row are removed, all in one unit of work.
///
/// Destructive and non-idempotent: a second call with the same id fails
/// with `NotFound`.
pub fn delete_transaction<S: BillingStore>(
    store: &mut S,
    transaction_id: TransactionId,
) -> Result<RefundReport, CoreError> {
    store
        .transaction(transaction_id)
        .ok_or_else(|| CoreError::not_found("transaction", transaction_id))?;

    let paid_shares: Vec<(MemberId, Amount)> = store
        .participants_of(transaction_id)
        .iter()
        .filter(|p| p.is_paid())
        .map(|p| (p.member_id, p.share_amount))
        .collect();

    let mut refunds = Vec::with_capacity(paid_shares.len());
    let mut total_refunded = Amount::ZERO;

    for (member_id, share) in paid_shares {
        let member = store
            .member_mut(member_id)
            .ok_or_else(|| CoreError::not_found("member", member_id))?;
        member.credit(share)?;
        let member_name = member.name.clone();

        total_refunded = total_refunded.checked_add(share)?;
        refunds.push(Refund {
            member_id,
            member_name,
            refunded_amount: share,
        });
    }

    store.remove_transaction(transaction_id);

    info!(
        transaction = %transaction_id,
        refunded = %total_refunded,
        refund_count = refunds.len(),
        "transaction deleted"
    );

    let refunded_count = refunds.len();
    Ok(RefundReport {
        transaction_id,
        refunds,
        total_refunded,
        refunded_count,
    })
}
