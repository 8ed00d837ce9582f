pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use dashmap::DashMap;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::aggregate::BatchSummary;
use crate::client::{HttpBackend, ScanBackend};
use crate::config::VulndeckConfig;
use crate::errors::VulndeckError;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ScanBackend>,
    /// Memoized batch summaries keyed by batch id. Performance only:
    /// aggregation is idempotent, entries are replaced wholesale.
    pub summaries: Arc<DashMap<String, Arc<BatchSummary>>>,
}

impl AppState {
    pub fn new(backend: Arc<dyn ScanBackend>) -> AppState {
        AppState {
            backend,
            summaries: Arc::new(DashMap::new()),
        }
    }
}

/// Builds the application state from config, logging in up front when
/// credentials are configured.
pub async fn create_app_state(config: &VulndeckConfig) -> Result<AppState, VulndeckError> {
    let base_url = config
        .backend_url()
        .ok_or_else(|| VulndeckError::Config("No backend base_url configured".into()))?;
    let token = config.backend.as_ref().and_then(|b| b.token.clone());
    let backend = HttpBackend::new(base_url, config.timeout_secs(), token)?;

    if let Some(auth) = &config.auth {
        if let (Some(email), Some(password)) = (&auth.email, &auth.password) {
            backend
                .login_and_store(&crate::models::LoginRequest {
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;
        }
    }

    Ok(AppState::new(Arc::new(backend)))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/auth/login", axum::routing::post(routes::auth::login))
        .route("/api/scan-batches", axum::routing::get(routes::scans::list_batches))
        .route("/api/scan-batches/{id}", axum::routing::get(routes::scans::get_batch))
        .route("/api/scan-batches/{id}/summary", axum::routing::get(routes::scans::get_summary))
        .route("/api/scan-batches/{id}/refresh", axum::routing::post(routes::scans::refresh_summary))
        .route("/api/statistics", axum::routing::get(routes::scans::get_statistics))
        .route("/api/vulnerabilities/{severity}", axum::routing::get(routes::scans::get_vulnerabilities))
        .route("/api/news", axum::routing::get(routes::news::get_news))
        .route("/api/campaigns", axum::routing::get(routes::news::get_campaigns))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
