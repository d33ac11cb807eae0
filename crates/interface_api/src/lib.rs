//! HTTP API Layer
//!
//! This crate provides the REST API for the subscription pool using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per resource, thin over the domain
//!   engines; every write goes through one store unit of work
//! - **Middleware**: Bearer-token authentication and audit logging
//! - **DTOs**: Validated request objects; responses are the domain views
//! - **Error Handling**: One `CoreError` → HTTP status mapping
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use infra_store::MemoryStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, health, members, services, subscriptions, transactions};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// Public routes: health, login, and the by-name statement lookup. All
/// other routes require an admin bearer token; the auth layer rejects
/// unauthenticated requests before any handler touches the store.
pub fn create_router(store: Arc<MemoryStore>, config: ApiConfig) -> Router {
    let state = AppState { store, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/login", post(auth_handlers::login))
        .route("/members/by-name/:name", get(members::statement_by_name));

    let member_routes = Router::new()
        .route("/", post(members::create))
        .route("/", get(members::list))
        .route("/:id", get(members::statement))
        .route("/:id/deposit", post(members::record_deposit));

    let service_routes = Router::new()
        .route("/", post(services::create))
        .route("/", get(services::list))
        .route("/:id", axum::routing::patch(services::update));

    let subscription_routes = Router::new()
        .route("/", post(subscriptions::create))
        .route("/", get(subscriptions::list))
        .route("/", axum::routing::delete(subscriptions::remove));

    let transaction_routes = Router::new()
        .route("/", post(transactions::create))
        .route("/", get(transactions::list))
        .route("/:id", get(transactions::detail))
        .route("/:id/process", post(transactions::process))
        .route("/:id", axum::routing::delete(transactions::remove));

    let admin_routes = Router::new()
        .nest("/members", member_routes)
        .nest("/services", service_routes)
        .nest("/subscriptions", subscription_routes)
        .nest("/transactions", transaction_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
