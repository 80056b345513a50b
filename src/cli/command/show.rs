use anyhow::Result;

use crate::db::{
    self,
    analysis::{DailyStore, MonthlyStore, WeeklyStore},
    registry::{ReportStore, UserStore},
};

/// Prints the contents of every local store, for inspection.
pub async fn show() -> Result<()> {
    show_users().await?;
    show_reports().await?;
    show_daily().await?;
    show_weekly().await?;
    show_monthly().await?;

    Ok(())
}

async fn show_users() -> Result<()> {
    let store = UserStore::new(db::open("usuarios").await?);
    store.create_table_if_absent().await?;

    println!("\nUsuários cadastrados:");
    let users = store.list_all().await?;
    if users.is_empty() {
        println!("Nenhum usuário cadastrado.");
    }
    for user in users {
        println!(
            "Nome: {} | CPF: {} | Deficiência: {} | CEP: {} | Endereço: {} | Resgate: {}",
            user.full_name,
            user.cpf,
            user.disability,
            user.cep,
            user.address,
            if user.needs_rescue { "sim" } else { "não" },
        );
    }

    Ok(())
}

async fn show_reports() -> Result<()> {
    let store = ReportStore::new(db::open("alagamentos").await?);
    store.create_table_if_absent().await?;

    println!("\nRelatórios de alagamento:");
    let reports = store.list_all().await?;
    if reports.is_empty() {
        println!("Nenhum relatório registrado.");
    }
    for report in reports {
        println!(
            "{} | {} | CEP: {} | {} | Chuva: {} | Nível: {} | {}",
            report.recorded_at.format("%Y-%m-%d %H:%M:%S"),
            report.reporter_name,
            report.cep,
            report.address,
            report.rain_intensity.as_str(),
            report.flood_level.as_str(),
            report.reporter_cpf,
        );
    }

    Ok(())
}

async fn show_daily() -> Result<()> {
    let store = DailyStore::new(db::open("analise_diaria").await?);
    store.create_table_if_absent().await?;

    println!("\nDados da análise diária:");
    let rows = store.list_all().await?;
    if rows.is_empty() {
        println!("Nenhum dado encontrado no banco de dados diário.");
    }
    for row in rows {
        println!(
            "CEP: {} | Data: {} | Chuva (mm): {:.2}",
            row.cep, row.date, row.precipitation_mm
        );
    }

    Ok(())
}

async fn show_weekly() -> Result<()> {
    let store = WeeklyStore::new(db::open("analise_mensal").await?);
    store.create_table_if_absent().await?;

    println!("\nDados da análise mensal, separados por semana:");
    let rows = store.list_all().await?;
    if rows.is_empty() {
        println!("Nenhum dado encontrado no banco de dados mensal.");
    }
    for row in rows {
        println!(
            "CEP: {} | Ano: {} | Mês: {:02} | Semana: {} | Precipitação: {:.2} mm | Latitude: {:.4} | Longitude: {:.4}",
            row.cep, row.year, row.month, row.week, row.precipitation_mm, row.latitude, row.longitude
        );
    }

    Ok(())
}

async fn show_monthly() -> Result<()> {
    let store = MonthlyStore::new(db::open("analise_anual").await?);
    store.create_table_if_absent().await?;

    println!("\nDados da análise anual:");
    let rows = store.list_all().await?;
    if rows.is_empty() {
        println!("Nenhum dado encontrado no banco de dados anual.");
    }
    for row in rows {
        println!(
            "CEP: {} | Ano: {} | Mês: {:02} | Precipitação (mm): {:.2} | Lat: {:.4} | Lon: {:.4}",
            row.cep, row.year, row.month, row.precipitation_mm, row.latitude, row.longitude
        );
    }

    Ok(())
}
