//! Core Kernel - Foundational types for the cost-splitting system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Integer money amounts in the smallest currency unit
//! - Calendar month keys for billing cycles
//! - Strongly-typed entity identifiers
//! - The shared error taxonomy surfaced by every operation

pub mod amount;
pub mod month;
pub mod identifiers;
pub mod error;

pub use amount::{Amount, AmountError};
pub use month::{MonthKey, MonthError};
pub use identifiers::{MemberId, ServiceId, SubscriptionId, TransactionId, ParticipantId};
pub use error::CoreError;
