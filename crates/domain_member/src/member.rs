//! Member entity

use chrono::{DateTime, Utc};
use core_kernel::{Amount, CoreError, MemberId};
use serde::{Deserialize, Serialize};

/// A member of the shared-subscription pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,
    /// Unique display name
    pub name: String,
    /// Current balance in minor units; negative means debt
    pub balance: Amount,
    /// When the member last deposited money
    pub last_deposit_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Creates a new member
    ///
    /// The initial balance may be negative when importing a member who
    /// already owes money.
    pub fn new(name: impl Into<String>, initial_balance: Amount) -> Self {
        Self {
            id: MemberId::new_v7(),
            name: name.into(),
            balance: initial_balance,
            last_deposit_at: None,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the balance covers the given amount
    pub fn can_cover(&self, amount: Amount) -> bool {
        self.balance >= amount
    }

    /// Records a deposit, stamping the deposit timestamp
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `amount` is strictly positive.
    pub fn record_deposit(&mut self, amount: Amount, now: DateTime<Utc>) -> Result<(), CoreError> {
        if !amount.is_positive() {
            return Err(CoreError::invalid_field(
                "amount",
                "deposit amount must be positive",
            ));
        }
        self.balance = self.balance.checked_add(amount)?;
        self.last_deposit_at = Some(now);
        Ok(())
    }

    /// Debits the balance (settlement collection)
    pub fn debit(&mut self, amount: Amount) -> Result<Amount, CoreError> {
        self.balance = self.balance.checked_sub(amount)?;
        Ok(self.balance)
    }

    /// Credits the balance (settlement reversal)
    pub fn credit(&mut self, amount: Amount) -> Result<Amount, CoreError> {
        self.balance = self.balance.checked_add(amount)?;
        Ok(self.balance)
    }
}
