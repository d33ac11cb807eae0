//! Roster storage port

use core_kernel::{MemberId, ServiceId};

use crate::service::Service;
use crate::subscription::Subscription;

/// Storage operations the service roster requires
pub trait RosterStore {
    /// Looks up a service by id
    fn service(&self, id: ServiceId) -> Option<&Service>;

    /// Looks up a service by unique short name
    fn service_by_name(&self, name: &str) -> Option<&Service>;

    /// Mutable service access
    fn service_mut(&mut self, id: ServiceId) -> Option<&mut Service>;

    /// Inserts a new service; the caller has already checked name uniqueness
    fn insert_service(&mut self, service: Service);

    /// All services, insertion order
    fn services(&self) -> Vec<&Service>;

    /// True if the member exists in the ledger
    fn member_exists(&self, id: MemberId) -> bool;

    /// The subscription row for a (member, service) pair, active or not
    fn subscription(&self, member: MemberId, service: ServiceId) -> Option<&Subscription>;

    /// Mutable access to the (member, service) subscription row
    fn subscription_mut(&mut self, member: MemberId, service: ServiceId)
        -> Option<&mut Subscription>;

    /// Inserts a new subscription row
    fn insert_subscription(&mut self, subscription: Subscription);

    /// Count of active subscriptions for a service
    fn active_subscription_count(&self, service: ServiceId) -> u32;

    /// All subscription rows, newest join first
    fn subscriptions(&self) -> Vec<&Subscription>;
}
