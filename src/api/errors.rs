use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::VulndeckError;

impl IntoResponse for VulndeckError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            VulndeckError::Config(_) | VulndeckError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            VulndeckError::Authentication(_) => StatusCode::UNAUTHORIZED,
            VulndeckError::NotFound(_) => StatusCode::NOT_FOUND,
            VulndeckError::RateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            VulndeckError::Network(_) | VulndeckError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
