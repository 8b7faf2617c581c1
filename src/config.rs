// src/config.rs
use log::warn;
use std::env;

/// Runtime configuration, read once at startup. Every value has a default so
/// the server runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Settings {
    pub rate_api_base: String,
    pub fetch_timeout_secs: u64,
    pub rate_cache_secs: i64,
    pub history_cache_secs: i64,
    /// Estimated transfer fee, as a fraction of the converted amount.
    pub fee_rate: f64,
    /// Seed for the synthetic history generator. Fixed so repeated requests
    /// chart the same series.
    pub history_seed: u64,
    /// Volatility below `mean * volatility_low` is classified as low,
    /// below `mean * volatility_moderate` as moderate, anything above as high.
    pub volatility_low: f64,
    pub volatility_moderate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rate_api_base: "https://api.exchangerate-api.com/v4/latest".to_string(),
            fetch_timeout_secs: 10,
            rate_cache_secs: 300,
            history_cache_secs: 3600,
            fee_rate: 0.02,
            history_seed: 42,
            volatility_low: 0.01,
            volatility_moderate: 0.03,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Settings {
            rate_api_base: env::var("RATE_API_BASE").unwrap_or(defaults.rate_api_base),
            fetch_timeout_secs: parse_var("FETCH_TIMEOUT_SECS", defaults.fetch_timeout_secs),
            rate_cache_secs: parse_var("RATE_CACHE_SECS", defaults.rate_cache_secs),
            history_cache_secs: parse_var("HISTORY_CACHE_SECS", defaults.history_cache_secs),
            fee_rate: parse_var("FEE_RATE", defaults.fee_rate),
            history_seed: parse_var("HISTORY_SEED", defaults.history_seed),
            volatility_low: parse_var("VOLATILITY_LOW", defaults.volatility_low),
            volatility_moderate: parse_var("VOLATILITY_MODERATE", defaults.volatility_moderate),
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Invalid {} value '{}', using default {}", key, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
