use serde::Deserialize;

/// Query accepted by the statistics and per-severity endpoints.
#[derive(Debug, Deserialize)]
pub struct ScanScopeQuery {
    pub scan_batch_id: Option<String>,
    pub limit: Option<u32>,
}

/// Query accepted by the paginated feed endpoints.
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}
