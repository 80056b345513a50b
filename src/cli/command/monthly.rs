use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, Local, NaiveDate};

use crate::{
    aggregate::aggregate_weekly,
    chart,
    cli::create_spinner,
    db::{self, analysis::WeeklyStore},
    record::WeeklyAggregate,
    validate, weather,
};

use super::{geocode_cep, monthly_chart_file_name};

pub async fn monthly(cep: &str, year: i32, month: u32) -> Result<()> {
    if !validate::is_valid_cep(cep) {
        bail!("CEP inválido. Deve conter 8 números.");
    }
    if !(1..=12).contains(&month) {
        bail!("Mês deve estar entre 1 e 12.");
    }
    let current_year = Local::now().year();
    if !(1900..=current_year).contains(&year) {
        bail!("Ano deve estar entre 1900 e {current_year}.");
    }

    let (latitude, longitude) = geocode_cep(cep).await?;
    println!("Latitude: {latitude}, Longitude: {longitude}");

    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("data inválida: {year}-{month:02}-01"))?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow!("data inválida após {year}-{month:02}"))?;

    let spinner = create_spinner("Buscando dados históricos de chuva...".to_string());
    let samples = weather::fetch_archive(latitude, longitude, start, end).await?;
    spinner.finish_and_clear();

    // The fetch window reaches into the next month; the aggregator expects
    // samples restricted to the target month.
    let samples: Vec<_> = samples
        .into_iter()
        .filter(|s| s.date.year() == year && s.date.month() == month)
        .collect();

    let weeks = aggregate_weekly(&samples);
    if weeks.is_empty() {
        println!("Sem dados para plotar.");
        return Ok(());
    }

    let store = WeeklyStore::new(db::open("analise_mensal").await?);
    store.create_table_if_absent().await?;
    for week in &weeks {
        store
            .append(&WeeklyAggregate {
                cep: cep.to_string(),
                year,
                month,
                week: week.week,
                precipitation_mm: week.precipitation_mm,
                latitude,
                longitude,
            })
            .await?;
    }

    let chart_path = monthly_chart_file_name(cep, year, month);
    chart::render_weekly_chart(&weeks, cep, year, month, &chart_path)?;
    println!("Gráfico salvo como {}", chart_path.display());

    Ok(())
}
