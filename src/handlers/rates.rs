// src/handlers/rates.rs
use log::{info, warn};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use crate::services::store::SessionStore;

pub async fn get_rates(base: String, store: Arc<SessionStore>) -> Result<Json, Rejection> {
    info!("Handling request for rates with base {}", base);

    let base = base.to_uppercase();
    let table = store.rates_for(&base).await;
    if table.rates.is_empty() {
        // "no data" is a valid answer, the dashboard renders a warning
        warn!("No rate data available for base {}", base);
    }

    Ok(warp::reply::json(&table))
}
