use serde::Deserialize;

use super::{HttpBackend, PageQuery};
use crate::errors::VulndeckError;
use crate::models::{NewsItem, Page, Pagination};

/// The paginated feeds nest items and pagination under the data envelope.
#[derive(Deserialize)]
struct FeedEnvelope {
    data: FeedBody,
}

#[derive(Deserialize)]
struct FeedBody {
    items: Vec<NewsItem>,
    pagination: Pagination,
}

impl HttpBackend {
    pub(crate) async fn fetch_feed(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> Result<Page<NewsItem>, VulndeckError> {
        let mut params = Vec::new();
        if let Some(page) = query.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(sort) = &query.sort {
            params.push(("sortedColumnName", sort.clone()));
        }
        if let Some(order) = &query.order {
            params.push(("sortedOrder", order.clone()));
        }
        if let Some(search) = &query.search {
            params.push(("searchQuery", search.clone()));
        }

        let resp = self.get(path, &params).await?;
        let envelope: FeedEnvelope = self.parse(path, resp).await?;
        Ok(Page {
            items: envelope.data.items,
            pagination: envelope.data.pagination,
        })
    }
}
