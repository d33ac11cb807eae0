//! Member ledger operations
//!
//! Free functions over the [`MemberStore`] port. Each function is one
//! logical operation; the caller wraps it in a storage unit of work so a
//! failure leaves no partial write behind.

use chrono::Utc;
use core_kernel::{Amount, CoreError, MemberId};
use tracing::info;

use crate::member::Member;
use crate::ports::MemberStore;
use crate::statement::UnpaidStatement;

/// Creates a member with the given unique name
///
/// # Errors
///
/// - `InvalidInput` when the name is empty
/// - `Conflict` when a member with the name already exists
pub fn create_member<S: MemberStore>(
    store: &mut S,
    name: &str,
    initial_balance: Amount,
) -> Result<Member, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::invalid_field("name", "name is required"));
    }
    if store.member_by_name(name).is_some() {
        return Err(CoreError::conflict(format!(
            "member with name '{name}' already exists"
        )));
    }

    let member = Member::new(name, initial_balance);
    store.insert_member(member.clone());

    info!(member = %member.id, name = %member.name, balance = %member.balance, "member created");
    Ok(member)
}

/// Deposits money into a member's balance
///
/// The only externally triggered balance increase outside of settlement
/// reversal. Returns the updated member.
///
/// # Errors
///
/// - `InvalidInput` unless `amount` is strictly positive
/// - `NotFound` when the member does not exist
pub fn deposit<S: MemberStore>(
    store: &mut S,
    id: MemberId,
    amount: Amount,
) -> Result<Member, CoreError> {
    let member = store
        .member_mut(id)
        .ok_or_else(|| CoreError::not_found("member", id))?;

    member.record_deposit(amount, Utc::now())?;
    let updated = member.clone();

    info!(member = %updated.id, amount = %amount, balance = %updated.balance, "deposit recorded");
    Ok(updated)
}

/// Builds the unpaid statement for a member
pub fn unpaid_statement<S: MemberStore>(
    store: &S,
    id: MemberId,
) -> Result<UnpaidStatement, CoreError> {
    let member = store
        .member(id)
        .ok_or_else(|| CoreError::not_found("member", id))?;

    UnpaidStatement::compile(member, store.pending_shares(id))
}

/// Builds the unpaid statement for a member looked up by name
///
/// This is the one read usable without admin credentials.
pub fn unpaid_statement_by_name<S: MemberStore>(
    store: &S,
    name: &str,
) -> Result<UnpaidStatement, CoreError> {
    let member = store
        .member_by_name(name)
        .ok_or_else(|| CoreError::not_found("member", name))?;

    UnpaidStatement::compile(member, store.pending_shares(member.id))
}

/// Statements for every member, for the admin overview
pub fn member_statements<S: MemberStore>(store: &S) -> Result<Vec<UnpaidStatement>, CoreError> {
    store
        .members()
        .into_iter()
        .map(|m| UnpaidStatement::compile(m, store.pending_shares(m.id)))
        .collect()
}
