//! Member handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_kernel::{Amount, MemberId};
use domain_member::{
    create_member, deposit, member_statements, unpaid_statement, unpaid_statement_by_name, Member,
    UnpaidStatement,
};
use validator::Validate;

use crate::dto::member::{CreateMemberRequest, DepositRequest};
use crate::error::ApiError;
use crate::AppState;

/// Creates a member
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    request.validate()?;

    let member = state
        .store
        .transact(|s| create_member(s, &request.name, Amount::new(request.initial_balance)))
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// Lists all members with their unpaid statements
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<UnpaidStatement>>, ApiError> {
    let statements = state.store.read(|s| member_statements(s)).await?;
    Ok(Json(statements))
}

/// Gets one member's unpaid statement
pub async fn statement(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
) -> Result<Json<UnpaidStatement>, ApiError> {
    let statement = state.store.read(|s| unpaid_statement(s, id)).await?;
    Ok(Json(statement))
}

/// Gets a member's unpaid statement by name
///
/// The one unauthenticated read: pool members check what they owe without
/// an admin token.
pub async fn statement_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<UnpaidStatement>, ApiError> {
    let statement = state
        .store
        .read(|s| unpaid_statement_by_name(s, &name))
        .await?;
    Ok(Json(statement))
}

/// Credits a deposit to a member's balance
pub async fn record_deposit(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
    Json(request): Json<DepositRequest>,
) -> Result<Json<Member>, ApiError> {
    request.validate()?;

    let member = state
        .store
        .transact(|s| deposit(s, id, Amount::new(request.amount)))
        .await?;

    Ok(Json(member))
}
