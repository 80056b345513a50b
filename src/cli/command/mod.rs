pub mod alert;
pub mod annual;
pub mod forecast;
pub mod monthly;
pub mod register;
pub mod report;
pub mod show;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Local;

pub use alert::alert;
pub use annual::annual;
pub use forecast::forecast;
pub use monthly::monthly;
pub use register::register;
pub use report::report;
pub use show::show;

use crate::{address, cli::create_spinner, cli::prompt, geocode, validate};

pub fn forecast_chart_file_name(cep: &str) -> PathBuf {
    let today = Local::now().date_naive();

    PathBuf::from(format!("chuva_{cep}_{today}.png"))
}

pub fn monthly_chart_file_name(cep: &str, year: i32, month: u32) -> PathBuf {
    PathBuf::from(format!("precipitacao_{cep}_{year}_{month:02}.png"))
}

pub fn annual_chart_file_name(cep: &str, year: i32) -> PathBuf {
    PathBuf::from(format!("precipitacao_{cep}_{year}.png"))
}

/// Prompts for a CEP until ViaCEP resolves it to an address.
pub(crate) async fn prompt_cep_until_resolved(label: &str) -> Result<(String, String)> {
    let mut cep = prompt::read_line(label)?;
    loop {
        if validate::is_valid_cep(&cep) {
            if let Some(resolved) = address::resolve(&cep).await {
                return Ok((cep, resolved));
            }
            println!("CEP não encontrado.");
        }
        cep = prompt::read_line("CEP inválido. Digite novamente:")?;
    }
}

/// Geocodes a CEP, failing the flow when the location cannot be resolved.
/// Never falls back to a default coordinate.
pub(crate) async fn geocode_cep(cep: &str) -> Result<(f64, f64)> {
    let spinner = create_spinner(format!("Geocodificando CEP {cep}..."));
    let coords = geocode::lat_lon_for_cep(cep).await;
    spinner.finish_and_clear();

    coords.ok_or_else(|| {
        anyhow!("não foi possível obter latitude e longitude para o CEP {cep}")
    })
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_chart_files_by_cep_and_period() {
        assert_eq!(
            monthly_chart_file_name("01310100", 2023, 3),
            PathBuf::from("precipitacao_01310100_2023_03.png")
        );
        assert_eq!(
            annual_chart_file_name("01310100", 2023),
            PathBuf::from("precipitacao_01310100_2023.png")
        );
        assert!(forecast_chart_file_name("01310100")
            .to_string_lossy()
            .starts_with("chuva_01310100_"));
    }
}
