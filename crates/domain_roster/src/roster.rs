//! Roster operations
//!
//! Free functions over the [`RosterStore`] port, each executed by the caller
//! inside one storage unit of work. In particular, `subscribe` performs its
//! capacity check and its subscription write in the same unit, which is what
//! makes capacity enforcement exactly-once under concurrency.

use chrono::Utc;
use core_kernel::{CoreError, MemberId, ServiceId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ports::RosterStore;
use crate::service::Service;
use crate::subscription::Subscription;

/// A service annotated with its current occupancy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummary {
    #[serde(flatten)]
    pub service: Service,
    /// Count of active subscriptions
    pub current_members: u32,
    /// `max_members - current_members`, saturating at zero
    pub available_slots: u32,
}

/// Partial update for a service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceUpdate {
    pub display_name: Option<String>,
    pub max_members: Option<u32>,
}

/// Filter for subscription listings
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SubscriptionFilter {
    pub member_id: Option<MemberId>,
    pub service_id: Option<ServiceId>,
    /// Some(true): active only; Some(false): left only; None: all
    pub active: Option<bool>,
}

/// Creates a service
///
/// # Errors
///
/// - `InvalidInput` when a name is empty or `max_members` is zero
/// - `Conflict` when the short name is taken
pub fn create_service<S: RosterStore>(
    store: &mut S,
    name: &str,
    display_name: &str,
    max_members: u32,
) -> Result<Service, CoreError> {
    let name = name.trim();
    let display_name = display_name.trim();
    if name.is_empty() {
        return Err(CoreError::invalid_field("name", "name is required"));
    }
    if display_name.is_empty() {
        return Err(CoreError::invalid_field(
            "display_name",
            "display name is required",
        ));
    }
    if max_members < 1 {
        return Err(CoreError::invalid_field(
            "max_members",
            "capacity must be at least 1",
        ));
    }
    if store.service_by_name(name).is_some() {
        return Err(CoreError::conflict(format!(
            "service with name '{name}' already exists"
        )));
    }

    let service = Service::new(name, display_name, max_members);
    store.insert_service(service.clone());

    info!(service = %service.id, name = %service.name, capacity = service.max_members, "service created");
    Ok(service)
}

/// Applies a partial update to a service
///
/// Lowering capacity below the current occupancy is allowed: existing
/// subscriptions stay, only new subscribes are blocked.
pub fn update_service<S: RosterStore>(
    store: &mut S,
    id: ServiceId,
    update: ServiceUpdate,
) -> Result<Service, CoreError> {
    if let Some(max_members) = update.max_members {
        if max_members < 1 {
            return Err(CoreError::invalid_field(
                "max_members",
                "capacity must be at least 1",
            ));
        }
    }

    let service = store
        .service_mut(id)
        .ok_or_else(|| CoreError::not_found("service", id))?;

    if let Some(display_name) = update.display_name {
        service.display_name = display_name;
    }
    if let Some(max_members) = update.max_members {
        service.max_members = max_members;
    }

    Ok(service.clone())
}

/// Lists all services with their occupancy
pub fn list_services<S: RosterStore>(store: &S) -> Vec<ServiceSummary> {
    store
        .services()
        .into_iter()
        .map(|service| {
            let current_members = store.active_subscription_count(service.id);
            ServiceSummary {
                current_members,
                available_slots: service.available_slots(current_members),
                service: service.clone(),
            }
        })
        .collect()
}

/// Subscribes a member to a service
///
/// If a left subscription row exists for the pair it is reactivated in
/// place; otherwise a new row is inserted.
///
/// # Errors
///
/// - `NotFound` when the member or the service does not exist
/// - `Conflict` when the service is full or the member is already actively
///   subscribed
pub fn subscribe<S: RosterStore>(
    store: &mut S,
    member_id: MemberId,
    service_id: ServiceId,
) -> Result<Subscription, CoreError> {
    if !store.member_exists(member_id) {
        return Err(CoreError::not_found("member", member_id));
    }
    let service = store
        .service(service_id)
        .ok_or_else(|| CoreError::not_found("service", service_id))?;
    let service_name = service.name.clone();

    let active_count = store.active_subscription_count(service_id);
    if service.is_full(active_count) {
        return Err(CoreError::conflict("service is full"));
    }

    if let Some(existing) = store.subscription(member_id, service_id) {
        if existing.is_active() {
            return Err(CoreError::conflict(
                "member is already subscribed to this service",
            ));
        }
        // Known to exist from the lookup above.
        let existing = store
            .subscription_mut(member_id, service_id)
            .ok_or_else(|| CoreError::not_found("subscription", member_id))?;
        existing.rejoin(Utc::now());
        let reactivated = existing.clone();
        info!(member = %member_id, service = %service_name, "subscription reactivated");
        return Ok(reactivated);
    }

    let subscription = Subscription::new(member_id, service_id);
    store.insert_subscription(subscription.clone());

    info!(member = %member_id, service = %service_name, "subscription created");
    Ok(subscription)
}

/// Cancels a member's active subscription to a service
///
/// Sets the leave timestamp; already-created transactions and participants
/// are untouched.
pub fn unsubscribe<S: RosterStore>(
    store: &mut S,
    member_id: MemberId,
    service_id: ServiceId,
) -> Result<Subscription, CoreError> {
    let subscription = store
        .subscription_mut(member_id, service_id)
        .filter(|s| s.is_active())
        .ok_or_else(|| CoreError::not_found("active subscription", member_id))?;

    subscription.leave(Utc::now());
    let left = subscription.clone();

    info!(member = %member_id, service = %service_id, "subscription cancelled");
    Ok(left)
}

/// Lists subscription rows matching the filter, newest join first
pub fn list_subscriptions<S: RosterStore>(
    store: &S,
    filter: SubscriptionFilter,
) -> Vec<Subscription> {
    store
        .subscriptions()
        .into_iter()
        .filter(|s| filter.member_id.map_or(true, |m| s.member_id == m))
        .filter(|s| filter.service_id.map_or(true, |sv| s.service_id == sv))
        .filter(|s| filter.active.map_or(true, |a| s.is_active() == a))
        .cloned()
        .collect()
}
