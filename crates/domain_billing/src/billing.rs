//! Billing engine - transaction creation
//!
//! Splits a monthly bill across a service's currently active subscribers.

use core_kernel::{Amount, CoreError, MonthKey, ServiceId};
use tracing::info;

use crate::participant::Participant;
use crate::ports::BillingStore;
use crate::queries::{transaction_detail, TransactionDetail};
use crate::transaction::Transaction;

/// Creates the billing transaction for one service-month
///
/// Each active subscriber becomes a PENDING participant owing
/// `ceil(total / count)`. The ceiling makes the collected sum overshoot the
/// bill by at most `count - 1` minor units, favoring the pool. The
/// transaction and all of its participants are inserted as one unit.
///
/// # Errors
///
/// - `InvalidInput` unless `total_amount` is strictly positive
/// - `NotFound` when the service does not exist
/// - `InvalidState` when the service has no active subscribers
/// - `Conflict` when a transaction for the (service, month) already exists
pub fn create_transaction<S: BillingStore>(
    store: &mut S,
    service_id: ServiceId,
    month: MonthKey,
    total_amount: Amount,
    description: Option<String>,
) -> Result<TransactionDetail, CoreError> {
    if !total_amount.is_positive() {
        return Err(CoreError::invalid_field(
            "total_amount",
            "total amount must be positive",
        ));
    }

    let service = store
        .service(service_id)
        .ok_or_else(|| CoreError::not_found("service", service_id))?;
    let display_name = service.display_name.clone();

    let subscribers = store.active_subscribers(service_id);
    if subscribers.is_empty() {
        return Err(CoreError::invalid_state(
            "no active subscribers for this service",
        ));
    }

    if store.transaction_for(service_id, month).is_some() {
        return Err(CoreError::conflict(format!(
            "transaction for {display_name} in {month} already exists"
        )));
    }

    let share_amount = total_amount.split_ceil(subscribers.len() as u32)?;

    let description =
        description.unwrap_or_else(|| format!("{display_name} subscription ({month})"));
    let transaction = Transaction::new(service_id, month, total_amount, description);
    let transaction_id = transaction.id;

    let participants: Vec<Participant> = subscribers
        .into_iter()
        .map(|member_id| Participant::new(transaction_id, member_id, share_amount))
        .collect();

    info!(
        transaction = %transaction_id,
        service = %service_id,
        month = %month,
        total = %total_amount,
        share = %share_amount,
        participants = participants.len(),
        "transaction created"
    );

    store.insert_transaction(transaction, participants);
    transaction_detail(store, transaction_id)
}
