use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, Local, NaiveDate};

use crate::{
    aggregate::aggregate_monthly,
    chart,
    cli::create_spinner,
    db::{self, analysis::MonthlyStore},
    record::MonthlyAggregate,
    validate, weather,
};

use super::{annual_chart_file_name, geocode_cep};

pub async fn annual(cep: &str, year: i32) -> Result<()> {
    if !validate::is_valid_cep(cep) {
        bail!("CEP inválido. Deve conter 8 números.");
    }
    let current_year = Local::now().year();
    if !(1900..=current_year).contains(&year) {
        bail!("Ano deve estar entre 1900 e {current_year}.");
    }

    let (latitude, longitude) = geocode_cep(cep).await?;

    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| anyhow!("data inválida: {year}-01-01"))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| anyhow!("data inválida: {year}-12-31"))?;

    let spinner = create_spinner("Buscando dados históricos de chuva...".to_string());
    let samples = weather::fetch_archive(latitude, longitude, start, end).await?;
    spinner.finish_and_clear();

    let samples: Vec<_> = samples
        .into_iter()
        .filter(|s| s.date.year() == year)
        .collect();

    let months = aggregate_monthly(&samples);
    if months.is_empty() {
        println!("Não foi possível gerar gráfico: dados vazios.");
        return Ok(());
    }

    let store = MonthlyStore::new(db::open("analise_anual").await?);
    store.create_table_if_absent().await?;
    for month in &months {
        store
            .append(&MonthlyAggregate {
                cep: cep.to_string(),
                year,
                month: month.month,
                precipitation_mm: month.precipitation_mm,
                latitude,
                longitude,
            })
            .await?;
    }

    let chart_path = annual_chart_file_name(cep, year);
    chart::render_monthly_chart(&months, cep, year, &chart_path)?;
    println!("Gráfico salvo como {}", chart_path.display());

    Ok(())
}
