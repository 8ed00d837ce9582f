use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use vulndeck::api::{build_router, AppState};
use vulndeck::client::{PageQuery, ScanBackend};
use vulndeck::errors::VulndeckError;
use vulndeck::models::{
    LoginRequest, LoginResponse, NewsItem, Page, Pagination, ScanBatch, ScanBatchInfo, ScanHost,
    ScanStatistics, ScanVulnerability, Severity, User,
};

/// Canned backend: one known batch ("b1"), everything else is missing.
struct StubBackend;

fn fixture_batch() -> ScanBatch {
    let critical = ScanVulnerability {
        id: "v1".into(),
        scan_batch_id: "b1".into(),
        host_id: "h1".into(),
        severity: Some("4".into()),
        plugin_id: Some("p1".into()),
        plugin_name: Some("OpenSSL Heartbeat Disclosure".into()),
        service: Some("https".into()),
        protocol: Some("tcp".into()),
        port: Some(443),
        ..Default::default()
    };
    let high = ScanVulnerability {
        id: "v2".into(),
        scan_batch_id: "b1".into(),
        host_id: "h1".into(),
        cvss_score: Some(7.5),
        plugin_id: Some("p2".into()),
        plugin_name: Some("Weak SSH Ciphers".into()),
        service: Some("ssh".into()),
        protocol: Some("tcp".into()),
        port: Some(22),
        ..Default::default()
    };
    ScanBatch {
        timestamp: Some("2026-01-10T08:00:00Z".into()),
        file_name: Some("weekly.nessus".into()),
        hosts: vec![
            ScanHost {
                id: "h1".into(),
                scan_batch_id: "b1".into(),
                host_name: "web01".into(),
                operating_system: Some("Ubuntu 22.04".into()),
                vulnerabilities: vec![critical, high],
                ..Default::default()
            },
            ScanHost {
                id: "h2".into(),
                scan_batch_id: "b1".into(),
                host_name: "db01".into(),
                vulnerabilities: vec![],
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

#[async_trait]
impl ScanBackend for StubBackend {
    async fn get_batch(&self, id: &str) -> Result<ScanBatch, VulndeckError> {
        if id == "b1" {
            Ok(fixture_batch())
        } else {
            Err(VulndeckError::NotFound(format!("Scan batch {} not found", id)))
        }
    }

    async fn list_batches(&self) -> Result<Vec<ScanBatchInfo>, VulndeckError> {
        Ok(vec![ScanBatchInfo {
            id: "b1".into(),
            file_name: Some("weekly.nessus".into()),
            total_items: Some(2),
            ..Default::default()
        }])
    }

    async fn statistics(
        &self,
        _scan_batch_id: Option<&str>,
    ) -> Result<ScanStatistics, VulndeckError> {
        Ok(ScanStatistics {
            total_hosts: 2,
            total_vulns: 2,
            critical_count: 1,
            high_count: 1,
            ..Default::default()
        })
    }

    async fn vulnerabilities_by_severity(
        &self,
        severity: Severity,
        _scan_batch_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<ScanVulnerability>, VulndeckError> {
        let mut vulns: Vec<ScanVulnerability> = fixture_batch()
            .hosts
            .into_iter()
            .flat_map(|h| h.vulnerabilities)
            .filter(|v| v.classify() == severity)
            .collect();
        if let Some(limit) = limit {
            vulns.truncate(limit as usize);
        }
        Ok(vulns)
    }

    async fn news(&self, query: &PageQuery) -> Result<Page<NewsItem>, VulndeckError> {
        let item = NewsItem {
            id: "n1".into(),
            title: "Critical OpenSSL advisory".into(),
            cves: Some(vec!["CVE-2026-0001".into()]),
            ..Default::default()
        };
        let items = match &query.search {
            Some(s) if !item.title.to_lowercase().contains(&s.to_lowercase()) => vec![],
            _ => vec![item],
        };
        let total = items.len() as u64;
        Ok(Page {
            items,
            pagination: Pagination {
                page: query.page.unwrap_or(1),
                limit: query.limit.unwrap_or(10),
                total,
                total_pages: 1,
                has_next_page: false,
                has_previous_page: false,
            },
        })
    }

    async fn campaigns(&self, query: &PageQuery) -> Result<Page<NewsItem>, VulndeckError> {
        self.news(query).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, VulndeckError> {
        if credentials.email == "ops@example.com" && credentials.password == "hunter2" {
            Ok(LoginResponse {
                access_token: "token-a".into(),
                refresh_token: "token-r".into(),
                user: User {
                    id: "u1".into(),
                    email: credentials.email.clone(),
                    ..Default::default()
                },
            })
        } else {
            Err(VulndeckError::Authentication("Invalid credentials".into()))
        }
    }
}

fn create_test_state() -> AppState {
    AppState::new(Arc::new(StubBackend))
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "vulndeck");
}

#[tokio::test]
async fn test_list_batches() {
    let state = create_test_state();
    let req = make_request("GET", "/api/scan-batches", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["batches"][0]["id"], "b1");
}

#[tokio::test]
async fn test_get_batch_passthrough() {
    let state = create_test_state();
    let req = make_request("GET", "/api/scan-batches/b1", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["hosts"].as_array().unwrap().len(), 2);
    assert_eq!(body["fileName"], "weekly.nessus");
}

#[tokio::test]
async fn test_summary_aggregates_batch() {
    let state = create_test_state();
    let req = make_request("GET", "/api/scan-batches/b1/summary", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    // Two findings: one by code "4", one by score 7.5.
    assert_eq!(body["criticalVulnerabilities"].as_array().unwrap().len(), 1);
    assert_eq!(body["highVulnerabilities"].as_array().unwrap().len(), 1);
    // Zero-finding host still appears as an asset.
    let assets = body["assets"].as_array().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[1]["name"], "db01");
    assert_eq!(body["serviceNames"].as_array().unwrap().len(), 2);
    assert_eq!(body["vulnerabilityPorts"], serde_json::json!(["443", "22"]));
    assert_eq!(body["osVersions"][0], "Ubuntu 22.04");

    // Second read is served from the cache.
    assert!(state.summaries.contains_key("b1"));
    let req = make_request("GET", "/api/scan-batches/b1/summary", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_drops_cached_summary() {
    let state = create_test_state();

    let req = make_request("GET", "/api/scan-batches/b1/summary", None);
    app(&state).oneshot(req).await.unwrap();
    assert!(state.summaries.contains_key("b1"));

    let req = make_request("POST", "/api/scan-batches/b1/refresh", None);
    let response = app(&state).oneshot(req).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["refreshed"], true);
    assert!(!state.summaries.contains_key("b1"));

    // Refreshing a batch that was never cached is a no-op.
    let req = make_request("POST", "/api/scan-batches/other/refresh", None);
    let response = app(&state).oneshot(req).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["refreshed"], false);
}

#[tokio::test]
async fn test_unknown_batch_is_404() {
    let state = create_test_state();
    let req = make_request("GET", "/api/scan-batches/nope/summary", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_vulnerabilities_by_severity() {
    let state = create_test_state();
    let req = make_request("GET", "/api/vulnerabilities/critical", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["severity"], "Critical");
    assert_eq!(body["total"], 1);
    assert_eq!(
        body["vulnerabilities"][0]["pluginName"],
        "OpenSSL Heartbeat Disclosure"
    );
}

#[tokio::test]
async fn test_invalid_severity_is_400() {
    let state = create_test_state();
    let req = make_request("GET", "/api/vulnerabilities/catastrophic", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_statistics_endpoint() {
    let state = create_test_state();
    let req = make_request("GET", "/api/statistics?scan_batch_id=b1", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["totalHosts"], 2);
    assert_eq!(body["criticalCount"], 1);
}

#[tokio::test]
async fn test_news_feed_with_search() {
    let state = create_test_state();
    let req = make_request("GET", "/api/news?search=openssl&page=1&limit=5", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["page"], 1);

    let req = make_request("GET", "/api/news?search=nomatch", None);
    let response = app(&state).oneshot(req).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_login_passthrough() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/auth/login",
        Some(serde_json::json!({"email": "ops@example.com", "password": "hunter2"})),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["accessToken"], "token-a");
    assert_eq!(body["user"]["email"], "ops@example.com");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/auth/login",
        Some(serde_json::json!({"email": "ops@example.com", "password": "wrong"})),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
