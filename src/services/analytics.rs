// src/services/analytics.rs
use serde::Serialize;
use statrs::statistics::Statistics;

use crate::models::RatePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Moderate,
    High,
}

/// Summary statistics over one history series.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub current_rate: f64,
    pub previous_rate: f64,
    pub change: f64,
    pub change_pct: f64,
    pub average_rate: f64,
    pub volatility: f64,
    pub volatility_level: VolatilityLevel,
    pub min_rate: f64,
    pub max_rate: f64,
}

/// Pure function of the series; `None` when there is nothing to summarize.
/// Thresholds are fractions of the mean (see `Settings`).
pub fn summarize(
    points: &[RatePoint],
    low_threshold: f64,
    moderate_threshold: f64,
) -> Option<AnalyticsSummary> {
    if points.is_empty() {
        return None;
    }

    let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
    let current_rate = rates[rates.len() - 1];
    let previous_rate = if rates.len() > 1 {
        rates[rates.len() - 2]
    } else {
        current_rate
    };
    let change = current_rate - previous_rate;
    let change_pct = if previous_rate != 0.0 {
        change / previous_rate * 100.0
    } else {
        0.0
    };

    let average_rate = rates.iter().mean();
    // sample standard deviation; a single observation has none
    let volatility = if rates.len() > 1 { rates.iter().std_dev() } else { 0.0 };
    let min_rate = rates.iter().copied().fold(f64::INFINITY, f64::min);
    let max_rate = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(AnalyticsSummary {
        current_rate,
        previous_rate,
        change,
        change_pct,
        average_rate,
        volatility,
        volatility_level: classify(volatility, average_rate, low_threshold, moderate_threshold),
        min_rate,
        max_rate,
    })
}

fn classify(volatility: f64, mean: f64, low: f64, moderate: f64) -> VolatilityLevel {
    if volatility < mean * low {
        VolatilityLevel::Low
    } else if volatility < mean * moderate {
        VolatilityLevel::Moderate
    } else {
        VolatilityLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn series(rates: &[f64]) -> Vec<RatePoint> {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        rates
            .iter()
            .enumerate()
            .map(|(i, &rate)| RatePoint {
                date: start + chrono::Duration::days(i as i64),
                rate,
                high: rate * 1.01,
                low: rate * 0.99,
                volume: 1_000_000,
                change_pct: 0.0,
            })
            .collect()
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert!(summarize(&[], 0.01, 0.03).is_none());
    }

    #[test]
    fn summary_over_known_values() {
        let s = summarize(&series(&[1.0, 2.0, 3.0, 4.0]), 0.01, 0.03).unwrap();
        assert_eq!(s.current_rate, 4.0);
        assert_eq!(s.previous_rate, 3.0);
        assert_eq!(s.change, 1.0);
        assert_relative_eq!(s.change_pct, 100.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(s.average_rate, 2.5, max_relative = 1e-12);
        assert_relative_eq!(s.volatility, (5.0f64 / 3.0).sqrt(), max_relative = 1e-12);
        assert_eq!(s.min_rate, 1.0);
        assert_eq!(s.max_rate, 4.0);
        assert_eq!(s.volatility_level, VolatilityLevel::High);
    }

    #[test]
    fn single_point_series_is_flat() {
        let s = summarize(&series(&[83.5]), 0.01, 0.03).unwrap();
        assert_eq!(s.previous_rate, s.current_rate);
        assert_eq!(s.change, 0.0);
        assert_eq!(s.change_pct, 0.0);
        assert_eq!(s.volatility, 0.0);
        assert_eq!(s.volatility_level, VolatilityLevel::Low);
    }

    #[test]
    fn volatility_classification_thresholds() {
        // mean 100, std dev just below/above the 1% and 3% cutoffs
        let steady = summarize(&series(&[99.9, 100.0, 100.1]), 0.01, 0.03).unwrap();
        assert_eq!(steady.volatility_level, VolatilityLevel::Low);

        let wobbly = summarize(&series(&[98.0, 100.0, 102.0]), 0.01, 0.03).unwrap();
        assert_eq!(wobbly.volatility_level, VolatilityLevel::Moderate);

        let swinging = summarize(&series(&[90.0, 100.0, 110.0]), 0.01, 0.03).unwrap();
        assert_eq!(swinging.volatility_level, VolatilityLevel::High);
    }
}
