//! Subscription entity

use chrono::{DateTime, Utc};
use core_kernel::{MemberId, ServiceId, SubscriptionId};
use serde::{Deserialize, Serialize};

/// Relates one member to one service
///
/// At most one subscription row exists per (member, service) pair. Leaving
/// sets the leave timestamp; rejoining clears it and resets the join
/// timestamp, preserving the row's history instead of duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier
    pub id: SubscriptionId,
    /// The subscribed member
    pub member_id: MemberId,
    /// The service subscribed to
    pub service_id: ServiceId,
    /// When the member (last) joined
    pub joined_at: DateTime<Utc>,
    /// When the member left; None while active
    pub left_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Creates a new active subscription
    pub fn new(member_id: MemberId, service_id: ServiceId) -> Self {
        Self {
            id: SubscriptionId::new_v7(),
            member_id,
            service_id,
            joined_at: Utc::now(),
            left_at: None,
        }
    }

    /// Active iff the leave timestamp is unset
    pub fn is_active(&self) -> bool {
        self.left_at.is_none()
    }

    /// Marks the subscription as left
    pub fn leave(&mut self, now: DateTime<Utc>) {
        self.left_at = Some(now);
    }

    /// Reactivates a left subscription in place
    pub fn rejoin(&mut self, now: DateTime<Utc>) {
        self.left_at = None;
        self.joined_at = now;
    }
}
