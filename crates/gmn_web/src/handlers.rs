use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gmn_core::{ArticleSummary, PagingInfo, ReaderDocument};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub articles: Vec<ArticleSummary>,
    pub paging: PagingInfo,
}

#[derive(Debug, Deserialize)]
pub struct ReaderParams {
    pub url: Option<String>,
}

pub async fn ping() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListingResponse>, ApiError> {
    let limit = params.limit.unwrap_or(gmn_feed::DEFAULT_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let (articles, paging) = state.feed.list_articles(limit, offset).await.map_err(|e| {
        tracing::error!(error = %e, limit, offset, "listing request failed");
        ApiError::from_error(e, "Failed to fetch")
    })?;

    Ok(Json(ListingResponse { articles, paging }))
}

pub async fn read_article(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReaderParams>,
) -> Result<Json<ReaderDocument>, ApiError> {
    let url = params
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing url param"))?;

    let doc = state.reader.read_article(&url).await.map_err(|e| {
        tracing::error!(error = %e, %url, "reader request failed");
        ApiError::from_error(e, "Reader failed")
    })?;

    Ok(Json(doc))
}
