mod address;
mod aggregate;
mod alert;
mod chart;
mod cli;
mod db;
mod geocode;
mod record;
mod validate;
mod weather;

use anyhow::Result;
use clap::Parser;
use cli::{command, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Register {} => command::register().await,
        Commands::Report {} => command::report().await,
        Commands::Alert { cep } => command::alert(cep).await,
        Commands::Forecast { cep } => command::forecast(cep).await,
        Commands::Monthly { cep, year, month } => command::monthly(cep, *year, *month).await,
        Commands::Annual { cep, year } => command::annual(cep, *year).await,
        Commands::Show {} => command::show().await,
    };

    if let Err(e) = outcome {
        eprintln!("Erro: {e}");
        std::process::exit(1);
    }

    Ok(())
}
