// src/handlers/conversions.rs
use log::info;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::services::ledger::{DEFAULT_RECENT, MAX_ENTRIES};
use crate::services::store::SessionStore;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

pub async fn list_conversions(
    query: RecentQuery,
    store: Arc<SessionStore>,
) -> Result<Json, Rejection> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT).min(MAX_ENTRIES);
    info!("Handling request for {} recent conversions", limit);

    let entries = store.recent_conversions(limit).await;
    Ok(warp::reply::json(&json!({
        "total": store.conversion_count().await,
        "entries": entries,
    })))
}

pub async fn clear_conversions(store: Arc<SessionStore>) -> Result<Json, Rejection> {
    info!("Handling request to clear conversion history");
    store.clear_conversions().await;
    Ok(warp::reply::json(&json!({ "cleared": true })))
}
