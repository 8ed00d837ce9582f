use serde::{Deserialize, Serialize};

/// One security news article from the backend news feed (or the
/// threat-campaign feed, which shares the shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub author: String,
    pub img: String,
    pub source: String,
    pub news_date: Option<String>,
    pub create_at: Option<String>,
    pub update_at: Option<String>,
    pub products: Option<Vec<String>>,
    pub cves: Option<Vec<String>>,
    pub recommendation: Option<String>,
}

/// Pagination envelope metadata as emitted by the backend's paginated
/// endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// One page of items plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}
