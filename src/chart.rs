//! Chart rendering with plotters.
//!
//! Pure downstream sink: takes already-aggregated series and writes a PNG.
//! An empty series renders nothing and leaves no file behind.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::*;

use crate::aggregate::{MonthlySum, WeeklySum};
use crate::record::DailySample;

/// Daily precipitation considered dangerous, drawn as a reference line on
/// the forecast chart.
const DANGER_LEVEL_MM: f64 = 50.0;

const CHART_SIZE: (u32, u32) = (1024, 768);

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

fn draw_error<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("falha ao desenhar gráfico: {err}")
}

/// Line chart of the 7-day forecast with the danger level marked.
pub fn render_forecast_chart(samples: &[DailySample], cep: &str, path: &Path) -> Result<()> {
    if samples.is_empty() {
        println!("Sem dados para plotar.");
        return Ok(());
    }

    let y_max = samples
        .iter()
        .map(|s| s.precipitation_mm)
        .fold(DANGER_LEVEL_MM, f64::max)
        * 1.2;
    let last_index = samples.len() as i32 - 1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Previsão de chuva para o CEP {cep}"),
            ("sans-serif", 32),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last_index.max(1), 0f64..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_labels(samples.len())
        .x_label_formatter(&|index| {
            samples
                .get(*index as usize)
                .map(|s| s.date.format("%d/%m").to_string())
                .unwrap_or_default()
        })
        .x_desc("Data")
        .y_desc("Chuva (mm)")
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(
            samples
                .iter()
                .enumerate()
                .map(|(i, s)| (i as i32, s.precipitation_mm)),
            &BLUE,
        ))
        .map_err(draw_error)?
        .label("Precipitação (mm)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(samples.iter().enumerate().map(|(i, s)| {
            Circle::new((i as i32, s.precipitation_mm), 4, BLUE.filled())
        }))
        .map_err(draw_error)?;

    chart
        .draw_series(LineSeries::new(
            [(0, DANGER_LEVEL_MM), (last_index.max(1), DANGER_LEVEL_MM)],
            &RED,
        ))
        .map_err(draw_error)?
        .label("Nível perigoso (50 mm)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;

    Ok(())
}

/// Bar chart of week-of-month sums for one month.
pub fn render_weekly_chart(
    weeks: &[WeeklySum],
    cep: &str,
    year: i32,
    month: u32,
    path: &Path,
) -> Result<()> {
    if weeks.is_empty() {
        println!("Sem dados para plotar.");
        return Ok(());
    }

    let y_max = weeks
        .iter()
        .map(|w| w.precipitation_mm)
        .fold(0.0, f64::max)
        * 1.2;
    let max_week = weeks.iter().map(|w| w.week).max().unwrap_or(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Precipitação mensal em {month:02}/{year} - CEP {cep}"),
            ("sans-serif", 32),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((1u32..max_week + 1).into_segmented(), 0f64..y_max.max(1.0))
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Semana do mês")
        .y_desc("Precipitação acumulada (mm)")
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .data(weeks.iter().map(|w| (w.week, w.precipitation_mm))),
        )
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;

    Ok(())
}

/// Bar chart of month sums for one year, labelled with month names.
pub fn render_monthly_chart(
    months: &[MonthlySum],
    cep: &str,
    year: i32,
    path: &Path,
) -> Result<()> {
    if months.is_empty() {
        println!("Sem dados para plotar.");
        return Ok(());
    }

    let y_max = months
        .iter()
        .map(|m| m.precipitation_mm)
        .fold(0.0, f64::max)
        * 1.2;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Precipitação anual em {year} - CEP {cep}"),
            ("sans-serif", 32),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((1u32..13u32).into_segmented(), 0f64..y_max.max(1.0))
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(month @ 1..=12) => {
                MONTH_ABBREVIATIONS[(*month - 1) as usize].to_string()
            }
            _ => String::new(),
        })
        .x_desc("Mês")
        .y_desc("Precipitação acumulada (mm)")
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .data(months.iter().map(|m| (m.month, m.precipitation_mm))),
        )
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_skip_rendering_for_empty_series() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.png");

        render_forecast_chart(&[], "01310100", &path).unwrap();
        render_weekly_chart(&[], "01310100", 2023, 3, &path).unwrap();
        render_monthly_chart(&[], "01310100", 2023, &path).unwrap();

        assert!(!path.exists());
    }

    // Needs a system font for the captions, so not run by default.
    #[test]
    #[ignore]
    fn should_render_forecast_chart_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("forecast.png");

        let samples: Vec<DailySample> = (1..=7)
            .map(|day| DailySample {
                date: NaiveDate::from_ymd_opt(2023, 3, day).unwrap(),
                precipitation_mm: day as f64 * 8.0,
            })
            .collect();

        render_forecast_chart(&samples, "01310100", &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    #[ignore]
    fn should_render_weekly_chart_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weekly.png");

        let weeks = vec![
            WeeklySum { week: 1, precipitation_mm: 10.0 },
            WeeklySum { week: 2, precipitation_mm: 5.0 },
            WeeklySum { week: 3, precipitation_mm: 20.0 },
        ];

        render_weekly_chart(&weeks, "01310100", 2023, 3, &path).unwrap();

        assert!(path.exists());
    }
}
