// src/services/store.rs
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use tokio::sync::RwLock;

use crate::config::Settings;
use crate::models::{ConversionRecord, CurrencyPair, RatePoint, RateTable};
use crate::services::cache::TtlCache;
use crate::services::history;
use crate::services::ledger::ConversionLedger;
use crate::services::rates;

/// Per-session state shared across handlers: the selected pair, the rate and
/// series caches, and the conversion ledger. Fetches happen outside the
/// locks; only the cache writes take them.
pub struct SessionStore {
    settings: Settings,
    rates: RwLock<TtlCache<String, RateTable>>,
    series: RwLock<TtlCache<(String, String, u32), Vec<RatePoint>>>,
    ledger: RwLock<ConversionLedger>,
    selected: RwLock<CurrencyPair>,
    last_update: RwLock<Option<DateTime<Utc>>>,
}

impl SessionStore {
    pub fn new(settings: Settings) -> Self {
        let rate_ttl = Duration::seconds(settings.rate_cache_secs);
        let series_ttl = Duration::seconds(settings.history_cache_secs);
        SessionStore {
            settings,
            rates: RwLock::new(TtlCache::new(rate_ttl)),
            series: RwLock::new(TtlCache::new(series_ttl)),
            ledger: RwLock::new(ConversionLedger::new()),
            selected: RwLock::new(CurrencyPair {
                from: "USD".to_string(),
                to: "INR".to_string(),
            }),
            last_update: RwLock::new(None),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Cached-or-fetched rate table for a base currency.
    pub async fn rates_for(&self, base: &str) -> RateTable {
        let key = base.to_string();
        if let Some(table) = self.rates.read().await.get(&key) {
            debug!("Rate cache hit for base {}", base);
            return table;
        }

        info!("Rate cache miss for base {}", base);
        let table = rates::fetch_exchange_rates(&self.settings, base).await;
        *self.last_update.write().await = Some(table.fetched_at);
        self.rates.write().await.insert(key, table.clone());
        table
    }

    /// Cached-or-generated synthetic series for a pair and horizon. An empty
    /// series means generation failed and is not memoized.
    pub async fn history_for(&self, from: &str, to: &str, days: u32) -> Vec<RatePoint> {
        let key = (from.to_string(), to.to_string(), days);
        if let Some(points) = self.series.read().await.get(&key) {
            debug!("Series cache hit for {}/{} over {} days", from, to, days);
            return points;
        }

        let points = history::generate_series(from, to, days, self.settings.history_seed);
        if !points.is_empty() {
            self.series.write().await.insert(key, points.clone());
        }
        points
    }

    pub async fn record_conversion(&self, entry: ConversionRecord) {
        self.ledger.write().await.record(entry);
    }

    pub async fn recent_conversions(&self, limit: usize) -> Vec<ConversionRecord> {
        self.ledger.read().await.recent(limit)
    }

    pub async fn conversion_count(&self) -> usize {
        self.ledger.read().await.len()
    }

    pub async fn clear_conversions(&self) {
        self.ledger.write().await.clear();
        info!("Conversion history cleared");
    }

    pub async fn selected_pair(&self) -> CurrencyPair {
        self.selected.read().await.clone()
    }

    pub async fn set_selected_pair(&self, pair: CurrencyPair) {
        *self.selected.write().await = pair;
    }

    pub async fn last_update(&self) -> Option<DateTime<Utc>> {
        *self.last_update.read().await
    }
}
