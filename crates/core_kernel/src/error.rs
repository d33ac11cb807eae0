//! Shared error taxonomy
//!
//! Every domain operation fails with one of five categories, and the API
//! layer maps each category to exactly one HTTP status. Mutation failures
//! guarantee that no partial write remains visible.

use crate::amount::AmountError;
use crate::month::MonthError;
use std::fmt;
use thiserror::Error;

/// The error type surfaced by all domain operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// The referenced entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A uniqueness or capacity constraint was violated
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The operation's precondition on current data does not hold
    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    /// Missing or malformed input
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<&'static str>,
    },

    /// The caller lacks admin credentials
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CoreError::Conflict {
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        CoreError::InvalidState {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::InvalidInput {
            message: message.into(),
            field: Some(field),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        CoreError::Unauthorized {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }

    /// Returns true if this error indicates a uniqueness/capacity conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::Conflict { .. })
    }
}

impl From<AmountError> for CoreError {
    fn from(err: AmountError) -> Self {
        CoreError::invalid_input(err.to_string())
    }
}

impl From<MonthError> for CoreError {
    fn from(err: MonthError) -> Self {
        CoreError::invalid_field("month", err.to_string())
    }
}
