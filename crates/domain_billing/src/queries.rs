//! Transaction read models for the admin surface

use core_kernel::{CoreError, MonthKey, ServiceId, TransactionId};
use serde::{Deserialize, Serialize};

use crate::participant::Participant;
use crate::ports::BillingStore;
use crate::transaction::{Transaction, TransactionStatus};

/// A participant joined with its member's name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantView {
    #[serde(flatten)]
    pub participant: Participant,
    pub member_name: String,
}

/// A transaction joined with service and participant display data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDetail {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub service_name: String,
    pub service_display_name: String,
    pub participants: Vec<ParticipantView>,
}

/// Filter for transaction listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TransactionFilter {
    pub service_id: Option<ServiceId>,
    pub month: Option<MonthKey>,
    pub status: Option<TransactionStatus>,
}

/// Loads one transaction with its participants
pub fn transaction_detail<S: BillingStore>(
    store: &S,
    id: TransactionId,
) -> Result<TransactionDetail, CoreError> {
    let transaction = store
        .transaction(id)
        .ok_or_else(|| CoreError::not_found("transaction", id))?
        .clone();

    let service = store
        .service(transaction.service_id)
        .ok_or_else(|| CoreError::not_found("service", transaction.service_id))?;

    let participants = store
        .participants_of(id)
        .into_iter()
        .map(|p| {
            let member_name = store
                .member(p.member_id)
                .map(|m| m.name.clone())
                .unwrap_or_default();
            ParticipantView {
                participant: p.clone(),
                member_name,
            }
        })
        .collect();

    Ok(TransactionDetail {
        service_name: service.name.clone(),
        service_display_name: service.display_name.clone(),
        transaction,
        participants,
    })
}

/// Lists transactions matching the filter, newest first
pub fn list_transactions<S: BillingStore>(
    store: &S,
    filter: TransactionFilter,
) -> Result<Vec<TransactionDetail>, CoreError> {
    store
        .transactions()
        .into_iter()
        .filter(|t| filter.service_id.map_or(true, |s| t.service_id == s))
        .filter(|t| filter.month.map_or(true, |m| t.month == m))
        .filter(|t| filter.status.map_or(true, |s| t.status == s))
        .map(|t| transaction_detail(store, t.id))
        .collect()
}
