//! Member DTOs

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    /// Minor currency units; negative imports existing debt
    #[serde(default)]
    pub initial_balance: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DepositRequest {
    /// Minor currency units, must be positive
    #[validate(range(min = 1))]
    pub amount: i64,
}
