//! Subscription handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain_roster::{list_subscriptions, subscribe, unsubscribe, Subscription, SubscriptionFilter};

use crate::dto::roster::SubscriptionRequest;
use crate::error::ApiError;
use crate::AppState;

/// Subscribes a member to a service
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<SubscriptionRequest>,
) -> Result<(StatusCode, Json<Subscription>), ApiError> {
    let subscription = state
        .store
        .transact(|s| subscribe(s, request.member_id, request.service_id))
        .await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

/// Lists subscriptions, optionally filtered by member, service, or activity
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<SubscriptionFilter>,
) -> Json<Vec<Subscription>> {
    let subscriptions = state.store.read(|s| list_subscriptions(s, filter)).await;
    Json(subscriptions)
}

/// Ends a member's active subscription
pub async fn remove(
    State(state): State<AppState>,
    Json(request): Json<SubscriptionRequest>,
) -> Result<Json<Subscription>, ApiError> {
    let subscription = state
        .store
        .transact(|s| unsubscribe(s, request.member_id, request.service_id))
        .await?;

    Ok(Json(subscription))
}
