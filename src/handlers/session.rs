// src/handlers/session.rs
use log::info;
use serde_json::json;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::{is_supported, CurrencyPair};
use crate::services::store::SessionStore;

pub async fn get_session(store: Arc<SessionStore>) -> Result<Json, Rejection> {
    let pair = store.selected_pair().await;
    Ok(warp::reply::json(&json!({
        "pair": pair,
        "last_update": store.last_update().await,
        "history_len": store.conversion_count().await,
    })))
}

pub async fn set_pair(pair: CurrencyPair, store: Arc<SessionStore>) -> Result<Json, Rejection> {
    let pair = CurrencyPair {
        from: pair.from.to_uppercase(),
        to: pair.to.to_uppercase(),
    };

    for code in [&pair.from, &pair.to] {
        if !is_supported(code) {
            return Err(warp::reject::custom(ApiError::bad_request(format!(
                "unknown currency code: {}",
                code
            ))));
        }
    }

    info!("Selected pair set to {}/{}", pair.from, pair.to);
    store.set_selected_pair(pair.clone()).await;
    Ok(warp::reply::json(&pair))
}
