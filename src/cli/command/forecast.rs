use anyhow::{bail, Result};
use chrono::{Duration, Local, NaiveDate};

use crate::{
    chart,
    cli::create_spinner,
    db::{self, analysis::DailyStore},
    validate, weather,
};

use super::{forecast_chart_file_name, geocode_cep};

/// Seven-day forecast: today through six days ahead.
const FORECAST_DAYS: i64 = 6;

/// The fetch window for the forecast, inclusive on both ends.
fn forecast_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Duration::days(FORECAST_DAYS))
}

pub async fn forecast(cep: &str) -> Result<()> {
    if !validate::is_valid_cep(cep) {
        bail!("CEP inválido. Deve conter 8 números.");
    }

    let (latitude, longitude) = geocode_cep(cep).await?;

    let (today, end) = forecast_window(Local::now().date_naive());

    let spinner = create_spinner("Buscando previsão de chuva...".to_string());
    let samples = weather::fetch_forecast(latitude, longitude, today, end).await?;
    spinner.finish_and_clear();

    if samples.is_empty() {
        bail!("nenhum dado meteorológico disponível para este local/período");
    }

    let chart_path = forecast_chart_file_name(cep);
    chart::render_forecast_chart(&samples, cep, &chart_path)?;
    println!("Gráfico salvo como {}", chart_path.display());

    let store = DailyStore::new(db::open("analise_diaria").await?);
    store.create_table_if_absent().await?;
    for sample in &samples {
        store.append(cep, sample).await?;
    }
    println!("Dados salvos no banco.");

    Ok(())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_span_exactly_seven_calendar_days() {
        let today = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();

        let (start, end) = forecast_window(today);

        assert_eq!(start, today);
        assert_eq!(end, NaiveDate::from_ymd_opt(2023, 3, 7).unwrap());
        // Inclusive window: six days between the endpoints, seven in total.
        assert_eq!((end - start).num_days(), 6);
        assert_eq!(start.iter_days().take_while(|d| *d <= end).count(), 7);
    }

    #[test]
    fn should_span_seven_days_across_a_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();

        let (start, end) = forecast_window(today);

        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!((end - start).num_days(), 6);
    }
}
