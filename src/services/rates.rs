// src/services/rates.rs
use chrono::Utc;
use log::{error, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::Settings;
use crate::models::{RateSource, RateTable};
use crate::BoxError;

/// Approximate USD-anchored rates, used verbatim when the live endpoint is
/// unreachable.
pub const FALLBACK_RATES: [(&str, f64); 15] = [
    ("USD", 1.0),
    ("EUR", 0.85),
    ("GBP", 0.73),
    ("JPY", 110.0),
    ("INR", 83.5),
    ("AUD", 1.35),
    ("CAD", 1.25),
    ("CHF", 0.92),
    ("CNY", 6.45),
    ("SGD", 1.35),
    ("AED", 3.67),
    ("SAR", 3.75),
    ("KRW", 1200.0),
    ("BRL", 5.2),
    ("RUB", 75.0),
];

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Fetch current rates for a base currency. Network or parse failures degrade
/// to the static fallback table; this never fails outright.
pub async fn fetch_exchange_rates(settings: &Settings, base: &str) -> RateTable {
    match fetch_live(settings, base).await {
        Ok(rates) => {
            info!("Fetched {} live rates for base {}", rates.len(), base);
            build_table(base, rates, RateSource::Live)
        }
        Err(e) => {
            warn!("Rate API request failed for base {}: {}. Using fallback data.", base, e);
            fallback_table(base)
        }
    }
}

async fn fetch_live(settings: &Settings, base: &str) -> Result<HashMap<String, f64>, BoxError> {
    let url = format!("{}/{}", settings.rate_api_base.trim_end_matches('/'), base);
    info!("Fetching exchange rates from URL: {}", url);

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.fetch_timeout_secs))
        .build()?;

    let response = client.get(&url).send().await?.error_for_status()?;
    let body: RatesResponse = response.json().await?;
    Ok(body.rates)
}

/// Static table rescaled to the requested base, so base-to-base stays 1.0.
pub fn fallback_table(base: &str) -> RateTable {
    let base_rate = FALLBACK_RATES
        .iter()
        .find(|(code, _)| *code == base)
        .map(|(_, rate)| *rate)
        .unwrap_or(1.0);

    if base_rate <= 0.0 {
        error!("Fallback rate for base {} is not positive, returning empty table", base);
        return build_table(base, HashMap::new(), RateSource::Fallback);
    }

    let rates = FALLBACK_RATES
        .iter()
        .map(|(code, rate)| (code.to_string(), rate / base_rate))
        .collect();

    build_table(base, rates, RateSource::Fallback)
}

fn build_table(base: &str, mut rates: HashMap<String, f64>, source: RateSource) -> RateTable {
    if !rates.is_empty() {
        rates.entry(base.to_string()).or_insert(1.0);
    }
    RateTable {
        base: base.to_string(),
        rates,
        fetched_at: Utc::now(),
        source,
    }
}
