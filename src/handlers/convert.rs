// src/handlers/convert.rs
use log::{info, warn};
use serde::Deserialize;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::services::convert::{self, ConvertError};
use crate::services::store::SessionStore;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

pub async fn post_convert(
    req: ConvertRequest,
    store: Arc<SessionStore>,
) -> Result<Json, Rejection> {
    info!(
        "Handling conversion request: {} {} -> {}",
        req.amount, req.from, req.to
    );

    let from = req.from.to_uppercase();
    let to = req.to.to_uppercase();

    match convert::convert(&store, &from, &to, req.amount).await {
        Ok(conversion) => Ok(warp::reply::json(&conversion)),
        Err(e @ ConvertError::RateUnavailable(_)) => {
            warn!("Conversion failed: {}", e);
            Err(warp::reject::custom(ApiError::not_found(e.to_string())))
        }
        Err(e) => {
            warn!("Conversion rejected: {}", e);
            Err(warp::reject::custom(ApiError::bad_request(e.to_string())))
        }
    }
}
