//! Service Roster Domain
//!
//! Owns service definitions and their capacity-bounded memberships. A
//! subscription relates one member to one service; it is active while its
//! leave timestamp is unset, and re-subscribing after leaving reactivates
//! the same row instead of inserting a duplicate.
//!
//! Invariant: the count of active subscriptions for a service never exceeds
//! its capacity. The capacity check and the subscription write happen inside
//! one storage unit of work, so concurrent subscribes cannot race past the
//! limit.

pub mod ports;
pub mod roster;
pub mod service;
pub mod subscription;

pub use ports::RosterStore;
pub use roster::{
    create_service, list_services, list_subscriptions, subscribe, unsubscribe, update_service,
    ServiceSummary, ServiceUpdate, SubscriptionFilter,
};
pub use service::Service;
pub use subscription::Subscription;
