// src/handlers/currencies.rs
use warp::reply::Json;
use warp::Rejection;

use crate::models::CURRENCIES;

/// The fixed currency catalog: code, display name, symbol, flag.
pub async fn list_currencies() -> Result<Json, Rejection> {
    Ok(warp::reply::json(&CURRENCIES))
}
