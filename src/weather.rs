//! Open-Meteo daily precipitation clients.
//!
//! The forecast endpoint covers the next days; the archive endpoint covers
//! historical series. Both return `daily.time` and `daily.precipitation_sum`
//! arrays which are validated here and converted into typed samples before
//! they reach the aggregation code. Provider failures and absent data both
//! surface as an empty series, never as an error.

use std::time::Duration;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::record::DailySample;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
const TIMEZONE: &str = "America/Sao_Paulo";

#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    #[serde(default)]
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    precipitation_sum: Vec<Option<f64>>,
}

/// Fetches the daily precipitation forecast for the given window.
pub async fn fetch_forecast(
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailySample>> {
    fetch_series(FORECAST_URL, latitude, longitude, start, end).await
}

/// Fetches historical daily precipitation for the given window.
pub async fn fetch_archive(
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailySample>> {
    fetch_series(ARCHIVE_URL, latitude, longitude, start, end).await
}

async fn fetch_series(
    url: &str,
    latitude: f64,
    longitude: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailySample>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(15))
        .build()?;

    let request = client.get(url).query(&[
        ("latitude", latitude.to_string().as_str()),
        ("longitude", longitude.to_string().as_str()),
        ("start_date", start.to_string().as_str()),
        ("end_date", end.to_string().as_str()),
        ("daily", "precipitation_sum"),
        ("timezone", TIMEZONE),
    ]);

    let response = match request.send().await {
        Ok(response) => match response.error_for_status() {
            Ok(response) => response,
            Err(err) => {
                eprintln!("Erro ao buscar dados da API: {err}");
                return Ok(Vec::new());
            }
        },
        Err(err) => {
            eprintln!("Erro na requisição à API meteorológica: {err}");
            return Ok(Vec::new());
        }
    };

    let payload: OpenMeteoResponse = match response.json().await {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("Resposta inválida da API meteorológica: {err}");
            return Ok(Vec::new());
        }
    };

    let Some(daily) = payload.daily else {
        return Ok(Vec::new());
    };

    to_samples(daily)
}

/// Pairs dates with precipitation values. Days the provider reports as null
/// are skipped, and a date that does not parse marks the whole payload as
/// malformed, yielding an empty series. A length mismatch between the two
/// arrays is a provider contract violation and is fatal.
fn to_samples(daily: DailyBlock) -> Result<Vec<DailySample>> {
    if daily.time.len() != daily.precipitation_sum.len() {
        bail!(
            "mismatched daily series lengths: {} dates, {} values",
            daily.time.len(),
            daily.precipitation_sum.len()
        );
    }

    let mut samples = Vec::with_capacity(daily.time.len());
    for (date, value) in daily.time.iter().zip(daily.precipitation_sum) {
        let Some(precipitation_mm) = value else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            eprintln!("Resposta inválida da API meteorológica: data {date}");
            return Ok(Vec::new());
        };
        samples.push(DailySample {
            date,
            precipitation_mm,
        });
    }

    Ok(samples)
}

// -- Tests -------------------------------------------------------------------
