//! Calendar month keys for billing cycles
//!
//! A transaction bills one service for one calendar month. Month keys are
//! exchanged as `YYYY-MM` strings and compared by their (year, month)
//! components, never lexically.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to month-key parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthError {
    #[error("Invalid month key: expected YYYY-MM, got '{0}'")]
    InvalidFormat(String),

    #[error("Month out of range: {0} (expected 1-12)")]
    MonthOutOfRange(u32),
}

/// A (year, month) billing-cycle key
///
/// Ordering is chronological: field order of the derive gives year-major,
/// month-minor comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key, validating the month component
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the key of the following month
    pub fn next(&self) -> MonthKey {
        if self.month == 12 {
            MonthKey {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthKey {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_part, month_part) = s
            .split_once('-')
            .ok_or_else(|| MonthError::InvalidFormat(s.to_string()))?;

        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(MonthError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year_part
            .parse()
            .map_err(|_| MonthError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| MonthError::InvalidFormat(s.to_string()))?;

        MonthKey::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
