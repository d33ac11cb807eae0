//! Transaction handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use core_kernel::{Amount, TransactionId};
use domain_billing::{
    create_transaction, delete_transaction, list_transactions, process_payments,
    transaction_detail, RefundReport, SettlementReport, TransactionDetail, TransactionFilter,
};
use validator::Validate;

use crate::dto::billing::CreateTransactionRequest;
use crate::error::ApiError;
use crate::AppState;

/// Creates the billing transaction for one service-month
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionDetail>), ApiError> {
    request.validate()?;

    let detail = state
        .store
        .transact(|s| {
            create_transaction(
                s,
                request.service_id,
                request.month,
                Amount::new(request.total_amount),
                request.description.clone(),
            )
        })
        .await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// Lists transactions, optionally filtered by service, month, or status
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> Result<Json<Vec<TransactionDetail>>, ApiError> {
    let details = state.store.read(|s| list_transactions(s, filter)).await?;
    Ok(Json(details))
}

/// Gets one transaction with its participants
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<TransactionDetail>, ApiError> {
    let detail = state.store.read(|s| transaction_detail(s, id)).await?;
    Ok(Json(detail))
}

/// Runs automatic settlement for a transaction
pub async fn process(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<SettlementReport>, ApiError> {
    let report = state.store.transact(|s| process_payments(s, id)).await?;
    Ok(Json(report))
}

/// Deletes a transaction, refunding collected shares
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<TransactionId>,
) -> Result<Json<RefundReport>, ApiError> {
    let report = state.store.transact(|s| delete_transaction(s, id)).await?;
    Ok(Json(report))
}
