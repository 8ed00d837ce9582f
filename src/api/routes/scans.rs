use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::aggregate::{summarize_batch, BatchSummary};
use crate::api::models::ScanScopeQuery;
use crate::api::AppState;
use crate::errors::VulndeckError;
use crate::models::Severity;

pub async fn list_batches(State(state): State<AppState>) -> Result<Json<Value>, VulndeckError> {
    let batches = state.backend.list_batches().await?;
    Ok(Json(json!({ "batches": batches, "total": batches.len() })))
}

pub async fn get_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, VulndeckError> {
    let batch = state.backend.get_batch(&id).await?;
    Ok(Json(serde_json::to_value(batch)?))
}

/// Aggregated view of one batch. Summaries are memoized by batch id and
/// rebuilt from scratch on a cache miss.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Arc<BatchSummary>>, VulndeckError> {
    if let Some(summary) = state.summaries.get(&id) {
        debug!(batch = %id, "Serving cached summary");
        return Ok(Json(summary.clone()));
    }

    let batch = state.backend.get_batch(&id).await?;
    let summary = Arc::new(summarize_batch(&batch));
    state.summaries.insert(id, summary.clone());
    Ok(Json(summary))
}

/// Drops the cached summary so the next read re-fetches and re-aggregates.
pub async fn refresh_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Value> {
    let dropped = state.summaries.remove(&id).is_some();
    Json(json!({ "refreshed": dropped }))
}

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<ScanScopeQuery>,
) -> Result<Json<Value>, VulndeckError> {
    let stats = state
        .backend
        .statistics(query.scan_batch_id.as_deref())
        .await?;
    Ok(Json(serde_json::to_value(stats)?))
}

pub async fn get_vulnerabilities(
    State(state): State<AppState>,
    Path(severity): Path<String>,
    Query(query): Query<ScanScopeQuery>,
) -> Result<Json<Value>, VulndeckError> {
    let severity = Severity::parse_label(&severity)
        .ok_or_else(|| VulndeckError::InvalidInput(format!("Unknown severity: {}", severity)))?;
    let vulns = state
        .backend
        .vulnerabilities_by_severity(severity, query.scan_batch_id.as_deref(), query.limit)
        .await?;
    Ok(Json(json!({
        "severity": severity.label(),
        "vulnerabilities": vulns,
        "total": vulns.len(),
    })))
}
