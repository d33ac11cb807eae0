//! Login handler

use axum::{extract::State, Json};
use tracing::warn;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::AppState;

/// Exchanges the admin password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.password != state.config.admin_password {
        warn!("admin login rejected");
        return Err(ApiError::Unauthorized("invalid password".to_string()));
    }

    let token = crate::auth::create_token(
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )?;

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt_expiration_secs,
    }))
}
