//! Service handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_kernel::ServiceId;
use domain_roster::{create_service, list_services, update_service, Service, ServiceSummary, ServiceUpdate};
use validator::Validate;

use crate::dto::roster::{CreateServiceRequest, UpdateServiceRequest};
use crate::error::ApiError;
use crate::AppState;

/// Creates a service
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    request.validate()?;

    let service = state
        .store
        .transact(|s| {
            create_service(s, &request.name, &request.display_name, request.max_members)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(service)))
}

/// Lists services with occupancy
pub async fn list(State(state): State<AppState>) -> Json<Vec<ServiceSummary>> {
    let summaries = state.store.read(|s| list_services(s)).await;
    Json(summaries)
}

/// Partially updates a service
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ServiceId>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, ApiError> {
    request.validate()?;

    let update = ServiceUpdate {
        display_name: request.display_name,
        max_members: request.max_members,
    };
    let service = state
        .store
        .transact(|s| update_service(s, id, update))
        .await?;

    Ok(Json(service))
}
