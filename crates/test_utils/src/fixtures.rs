//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent and
//! predictable so unit tests can assert on exact values.

use core_kernel::{Amount, MonthKey};
use once_cell::sync::Lazy;

/// Fixture for Amount test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// A typical music streaming bill in minor units
    pub fn spotify_total() -> Amount {
        Amount::new(15_890)
    }

    /// A typical video streaming bill in minor units
    pub fn youtube_total() -> Amount {
        Amount::new(22_091)
    }

    /// A bill that does not divide evenly by common pool sizes
    pub fn awkward_total() -> Amount {
        Amount::new(101)
    }

    /// A comfortable starting balance
    pub fn rich_balance() -> Amount {
        Amount::new(50_000)
    }

    /// A balance that covers no realistic share
    pub fn broke_balance() -> Amount {
        Amount::new(10)
    }

    /// Imported debt carried in from outside the system
    pub fn imported_debt() -> Amount {
        Amount::new(-11_677)
    }

    /// A typical top-up
    pub fn deposit() -> Amount {
        Amount::new(10_000)
    }
}

/// Fixture for MonthKey test data
pub struct MonthFixtures;

impl MonthFixtures {
    pub fn july() -> MonthKey {
        MonthKey::new(2025, 7).unwrap()
    }

    pub fn august() -> MonthKey {
        MonthKey::new(2025, 8).unwrap()
    }

    pub fn september() -> MonthKey {
        MonthKey::new(2025, 9).unwrap()
    }

    /// A December month, for year-wrap assertions
    pub fn december() -> MonthKey {
        MonthKey::new(2025, 12).unwrap()
    }
}

/// Member names used by the seeded pool, in seeding order
pub static POOL_MEMBER_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["harang", "dako", "baek", "tuna"]);

/// (short name, display name, capacity) of the seeded services
pub static POOL_SERVICES: Lazy<Vec<(&'static str, &'static str, u32)>> = Lazy::new(|| {
    vec![
        ("spotify", "Spotify Premium", 6),
        ("youtube", "YouTube Premium", 5),
        ("netflix", "Netflix", 4),
    ]
});
