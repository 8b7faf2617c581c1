// src/models.rs
use serde::{Serialize, Deserialize};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;

/// Reference data for one supported currency.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
}

/// Fixed catalog of supported currencies. Loaded once, never mutated.
pub const CURRENCIES: [CurrencyInfo; 15] = [
    CurrencyInfo { code: "USD", name: "US Dollar", symbol: "$", flag: "🇺🇸" },
    CurrencyInfo { code: "EUR", name: "Euro", symbol: "€", flag: "🇪🇺" },
    CurrencyInfo { code: "GBP", name: "British Pound", symbol: "£", flag: "🇬🇧" },
    CurrencyInfo { code: "JPY", name: "Japanese Yen", symbol: "¥", flag: "🇯🇵" },
    CurrencyInfo { code: "INR", name: "Indian Rupee", symbol: "₹", flag: "🇮🇳" },
    CurrencyInfo { code: "AUD", name: "Australian Dollar", symbol: "A$", flag: "🇦🇺" },
    CurrencyInfo { code: "CAD", name: "Canadian Dollar", symbol: "C$", flag: "🇨🇦" },
    CurrencyInfo { code: "CHF", name: "Swiss Franc", symbol: "Fr", flag: "🇨🇭" },
    CurrencyInfo { code: "CNY", name: "Chinese Yuan", symbol: "¥", flag: "🇨🇳" },
    CurrencyInfo { code: "SGD", name: "Singapore Dollar", symbol: "S$", flag: "🇸🇬" },
    CurrencyInfo { code: "AED", name: "UAE Dirham", symbol: "د.إ", flag: "🇦🇪" },
    CurrencyInfo { code: "SAR", name: "Saudi Riyal", symbol: "﷼", flag: "🇸🇦" },
    CurrencyInfo { code: "KRW", name: "South Korean Won", symbol: "₩", flag: "🇰🇷" },
    CurrencyInfo { code: "BRL", name: "Brazilian Real", symbol: "R$", flag: "🇧🇷" },
    CurrencyInfo { code: "RUB", name: "Russian Ruble", symbol: "₽", flag: "🇷🇺" },
];

pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

pub fn is_supported(code: &str) -> bool {
    currency_info(code).is_some()
}

/// Which source produced a rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    Live,
    Fallback,
}

/// Multipliers relative to one base currency, as of `fetched_at`.
/// Invariant: `rates[base] == 1.0`.
#[derive(Debug, Clone, Serialize)]
pub struct RateTable {
    pub base: String,
    pub rates: HashMap<String, f64>,
    pub fetched_at: DateTime<Utc>,
    pub source: RateSource,
}

/// One successful conversion, as kept by the history ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub timestamp: DateTime<Utc>,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub rate: f64,
}

/// One daily observation in a synthetic history series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub rate: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u32,
    pub change_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
}
