// src/handlers/history.rs
use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::services::analytics;
use crate::services::store::SessionStore;

pub const DEFAULT_HORIZON_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<u32>,
}

pub async fn get_history(
    from: String,
    to: String,
    query: HistoryQuery,
    store: Arc<SessionStore>,
) -> Result<Json, Rejection> {
    let days = query.days.unwrap_or(DEFAULT_HORIZON_DAYS);
    let (from, to) = (from.to_uppercase(), to.to_uppercase());
    info!("Handling history request for {}/{} over {} days", from, to, days);

    let points = store.history_for(&from, &to, days).await;
    if points.is_empty() {
        warn!("No chart data for {}/{} over {} days", from, to, days);
    }

    Ok(warp::reply::json(&json!({
        "from": from,
        "to": to,
        "days": days,
        "points": points,
    })))
}

pub async fn get_analytics(
    from: String,
    to: String,
    query: HistoryQuery,
    store: Arc<SessionStore>,
) -> Result<Json, Rejection> {
    let days = query.days.unwrap_or(DEFAULT_HORIZON_DAYS);
    let (from, to) = (from.to_uppercase(), to.to_uppercase());
    info!("Handling analytics request for {}/{} over {} days", from, to, days);

    let points = store.history_for(&from, &to, days).await;
    let settings = store.settings();
    match analytics::summarize(&points, settings.volatility_low, settings.volatility_moderate) {
        Some(summary) => Ok(warp::reply::json(&summary)),
        None => {
            warn!("No chart data to summarize for {}/{}", from, to);
            Err(warp::reject::custom(ApiError::not_found(
                "no chart data available",
            )))
        }
    }
}
