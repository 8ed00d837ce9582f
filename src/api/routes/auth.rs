use axum::{extract::State, Json};

use crate::api::AppState;
use crate::errors::VulndeckError;
use crate::models::{LoginRequest, LoginResponse};

/// Passthrough to the external login endpoint. No session is kept here;
/// callers hold the returned tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, VulndeckError> {
    let login = state.backend.login(&credentials).await?;
    Ok(Json(login))
}
