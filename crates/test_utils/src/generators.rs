//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use core_kernel::{Amount, MonthKey};
use proptest::prelude::*;

/// Strategy for positive bill totals in minor units
pub fn bill_total_strategy() -> impl Strategy<Value = Amount> {
    (1i64..100_000_000i64).prop_map(Amount::new)
}

/// Strategy for member starting balances, including imported debt
pub fn balance_strategy() -> impl Strategy<Value = Amount> {
    (-1_000_000i64..10_000_000i64).prop_map(Amount::new)
}

/// Strategy for deposit amounts (always positive)
pub fn deposit_strategy() -> impl Strategy<Value = Amount> {
    (1i64..10_000_000i64).prop_map(Amount::new)
}

/// Strategy for realistic pool sizes
pub fn pool_size_strategy() -> impl Strategy<Value = u32> {
    1u32..=20
}

/// Strategy for valid billing months
pub fn month_strategy() -> impl Strategy<Value = MonthKey> {
    (2000i32..2100, 1u32..=12).prop_map(|(year, month)| {
        MonthKey::new(year, month).expect("generated month is in range")
    })
}

/// Strategy for member names
pub fn member_name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,12}"
}
