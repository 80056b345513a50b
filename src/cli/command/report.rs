use anyhow::Result;
use chrono::Local;

use crate::{
    cli::prompt,
    db::{self, registry::ReportStore},
    record::{FloodLevel, FloodReport, RainIntensity},
    validate,
};

use super::prompt_cep_until_resolved;

pub async fn report() -> Result<()> {
    let reporter_name = prompt::read_line("Digite seu nome completo:")?;
    let reporter_cpf = prompt::read_until_valid(
        "Digite seu CPF (somente números):",
        "CPF inválido. Tente novamente:",
        validate::is_valid_cpf,
    )?;

    let (cep, address) =
        prompt_cep_until_resolved("Digite o CEP da área alagada (somente números):").await?;

    let rain_intensity = prompt::read_parsed(
        "Nível da chuva (fraca, média, forte):",
        "Informe um nível válido: fraca, média ou forte:",
        RainIntensity::from_input,
    )?;
    let flood_level = prompt::read_parsed(
        "Nível da água (alto, médio, baixo):",
        "Informe um nível válido: alto, médio ou baixo:",
        FloodLevel::from_input,
    )?;

    let store = ReportStore::new(db::open("alagamentos").await?);
    store.create_table_if_absent().await?;

    store
        .append(&FloodReport {
            reporter_name,
            reporter_cpf,
            cep,
            address,
            rain_intensity,
            flood_level,
            recorded_at: Local::now().naive_local(),
        })
        .await?;

    println!("\nRelatório de alagamento enviado com sucesso!");

    Ok(())
}
