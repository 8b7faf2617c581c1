// src/services/convert.rs
use chrono::Utc;
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::models::{ConversionRecord, RateSource, RateTable};
use crate::services::store::SessionStore;

#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("source and target currency must differ")]
    SameCurrency,

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("no conversion rate available for {0}")]
    RateUnavailable(String),
}

/// A priced conversion, including the provenance of the rate it used.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub rate: f64,
    pub reverse_rate: f64,
    pub fee: f64,
    pub source: RateSource,
}

/// Checks that must pass before any rate fetch happens.
pub fn validate_request(from: &str, to: &str, amount: f64) -> Result<(), ConvertError> {
    if from == to {
        return Err(ConvertError::SameCurrency);
    }
    // also rejects NaN
    if !(amount > 0.0) {
        return Err(ConvertError::NonPositiveAmount);
    }
    Ok(())
}

/// Price a conversion against an already-fetched table. Never invents a rate:
/// a missing or non-positive entry is unavailable.
pub fn quote(
    table: &RateTable,
    to: &str,
    amount: f64,
    fee_rate: f64,
) -> Result<Conversion, ConvertError> {
    let rate = *table
        .rates
        .get(to)
        .ok_or_else(|| ConvertError::RateUnavailable(to.to_string()))?;

    if rate <= 0.0 || !rate.is_finite() {
        return Err(ConvertError::RateUnavailable(to.to_string()));
    }

    let converted_amount = amount * rate;
    Ok(Conversion {
        from: table.base.clone(),
        to: to.to_string(),
        amount,
        converted_amount,
        rate,
        reverse_rate: 1.0 / rate,
        fee: converted_amount * fee_rate,
        source: table.source,
    })
}

/// Full conversion pass: validate, resolve a rate through the cache, price,
/// and record the result in the session ledger.
pub async fn convert(
    store: &SessionStore,
    from: &str,
    to: &str,
    amount: f64,
) -> Result<Conversion, ConvertError> {
    validate_request(from, to, amount)?;

    let table = store.rates_for(from).await;
    let conversion = quote(&table, to, amount, store.settings().fee_rate)?;

    store
        .record_conversion(ConversionRecord {
            timestamp: Utc::now(),
            from: conversion.from.clone(),
            to: conversion.to.clone(),
            amount: conversion.amount,
            converted_amount: conversion.converted_amount,
            rate: conversion.rate,
        })
        .await;

    info!(
        "Converted {} {} -> {:.4} {} at rate {:.4} ({:?})",
        amount, from, conversion.converted_amount, to, conversion.rate, conversion.source
    );
    Ok(conversion)
}
