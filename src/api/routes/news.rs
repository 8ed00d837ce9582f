use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::api::models::FeedQuery;
use crate::api::AppState;
use crate::client::PageQuery;
use crate::errors::VulndeckError;

impl From<FeedQuery> for PageQuery {
    fn from(query: FeedQuery) -> PageQuery {
        PageQuery {
            page: query.page,
            limit: query.limit,
            sort: query.sort,
            order: query.order,
            search: query.search,
        }
    }
}

pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Value>, VulndeckError> {
    let page = state.backend.news(&query.into()).await?;
    Ok(Json(json!({ "items": page.items, "pagination": page.pagination })))
}

pub async fn get_campaigns(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Value>, VulndeckError> {
    let page = state.backend.campaigns(&query.into()).await?;
    Ok(Json(json!({ "items": page.items, "pagination": page.pagination })))
}
