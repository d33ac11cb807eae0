//! Service entity

use chrono::{DateTime, Utc};
use core_kernel::ServiceId;
use serde::{Deserialize, Serialize};

/// A shared subscription service (e.g. a streaming account)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier
    pub id: ServiceId,
    /// Unique short name (e.g. "spotify")
    pub name: String,
    /// Human-readable name (e.g. "Spotify Premium")
    pub display_name: String,
    /// Maximum number of concurrently active subscriptions
    pub max_members: u32,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Creates a new service
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, max_members: u32) -> Self {
        Self {
            id: ServiceId::new_v7(),
            name: name.into(),
            display_name: display_name.into(),
            max_members,
            created_at: Utc::now(),
        }
    }

    /// Returns true if `active_count` fills the service
    pub fn is_full(&self, active_count: u32) -> bool {
        active_count >= self.max_members
    }

    /// Remaining slots given the current active count, saturating at zero
    pub fn available_slots(&self, active_count: u32) -> u32 {
        self.max_members.saturating_sub(active_count)
    }
}
