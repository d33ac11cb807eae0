//! Transaction DTOs

use core_kernel::{MonthKey, ServiceId};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    pub service_id: ServiceId,
    /// Billing month as `YYYY-MM`
    pub month: MonthKey,
    /// Minor currency units, must be positive
    #[validate(range(min = 1))]
    pub total_amount: i64,
    pub description: Option<String>,
}
