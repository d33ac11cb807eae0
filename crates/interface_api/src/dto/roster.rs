//! Service and subscription DTOs

use core_kernel::{MemberId, ServiceId};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(length(min = 1, max = 128))]
    pub display_name: String,
    #[validate(range(min = 1))]
    pub max_members: u32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 128))]
    pub display_name: Option<String>,
    #[validate(range(min = 1))]
    pub max_members: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionRequest {
    pub member_id: MemberId,
    pub service_id: ServiceId,
}
