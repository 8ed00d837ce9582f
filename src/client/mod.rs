pub mod auth;
pub mod news;
pub mod scan_results;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::errors::VulndeckError;
use crate::models::{
    LoginRequest, LoginResponse, NewsItem, Page, ScanBatch, ScanBatchInfo, ScanStatistics,
    ScanVulnerability, Severity,
};

/// Query parameters accepted by the backend's paginated endpoints.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

/// Seam over the external scan-result backend. The serving layer and CLI
/// only talk to this trait; tests substitute a stub.
#[async_trait]
pub trait ScanBackend: Send + Sync {
    /// Full scan batch with hosts and findings inlined.
    async fn get_batch(&self, id: &str) -> Result<ScanBatch, VulndeckError>;

    /// Descriptors for all stored batches.
    async fn list_batches(&self) -> Result<Vec<ScanBatchInfo>, VulndeckError>;

    /// Backend-computed severity totals, optionally scoped to one batch.
    async fn statistics(&self, scan_batch_id: Option<&str>)
        -> Result<ScanStatistics, VulndeckError>;

    /// Findings at one severity level, optionally scoped and limited.
    async fn vulnerabilities_by_severity(
        &self,
        severity: Severity,
        scan_batch_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<ScanVulnerability>, VulndeckError>;

    /// Paginated security news feed.
    async fn news(&self, query: &PageQuery) -> Result<Page<NewsItem>, VulndeckError>;

    /// Paginated threat-campaign feed (same record shape as news).
    async fn campaigns(&self, query: &PageQuery) -> Result<Page<NewsItem>, VulndeckError>;

    /// Exchanges credentials for tokens at the external login endpoint.
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, VulndeckError>;
}

/// Most backend responses wrap the payload in a `data` envelope.
#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// reqwest-backed client for the scan-result REST API.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout_secs: u64, token: Option<String>) -> Result<Self, VulndeckError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| VulndeckError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(token),
        })
    }

    /// Stores a bearer token for subsequent requests.
    pub async fn set_token(&self, token: &str) {
        *self.token.write().await = Some(token.to_string());
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET with bearer auth (when a token is held) and query parameters.
    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, VulndeckError> {
        let mut req = self.client.get(self.url(path)).query(query);
        if let Some(token) = self.token.read().await.as_deref() {
            req = req.bearer_auth(token);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| VulndeckError::Network(format!("Request to {} failed: {}", path, e)))?;
        check_status(path, resp).await
    }

    pub(crate) async fn parse<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        resp: reqwest::Response,
    ) -> Result<T, VulndeckError> {
        resp.json::<T>()
            .await
            .map_err(|e| VulndeckError::Upstream(format!("Invalid response from {}: {}", path, e)))
    }
}

/// Maps non-2xx upstream responses onto the error taxonomy, carrying the
/// backend `message` when the body is parseable.
pub(crate) async fn check_status(
    path: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, VulndeckError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{} returned {}", path, status));

    Err(match status.as_u16() {
        401 | 403 => VulndeckError::Authentication(message),
        404 => VulndeckError::NotFound(message),
        429 => VulndeckError::RateLimit(message),
        400 => VulndeckError::InvalidInput(message),
        _ => VulndeckError::Upstream(message),
    })
}

#[async_trait]
impl ScanBackend for HttpBackend {
    async fn get_batch(&self, id: &str) -> Result<ScanBatch, VulndeckError> {
        self.fetch_batch(id).await
    }

    async fn list_batches(&self) -> Result<Vec<ScanBatchInfo>, VulndeckError> {
        self.fetch_batch_infos().await
    }

    async fn statistics(
        &self,
        scan_batch_id: Option<&str>,
    ) -> Result<ScanStatistics, VulndeckError> {
        self.fetch_statistics(scan_batch_id).await
    }

    async fn vulnerabilities_by_severity(
        &self,
        severity: Severity,
        scan_batch_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<ScanVulnerability>, VulndeckError> {
        self.fetch_vulnerabilities(severity, scan_batch_id, limit)
            .await
    }

    async fn news(&self, query: &PageQuery) -> Result<Page<NewsItem>, VulndeckError> {
        self.fetch_feed("/news/pagination", query).await
    }

    async fn campaigns(&self, query: &PageQuery) -> Result<Page<NewsItem>, VulndeckError> {
        self.fetch_feed("/campaign/pagination", query).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, VulndeckError> {
        self.post_login(credentials).await
    }
}
