use anyhow::{bail, Result};
use chrono::Local;

use crate::{
    alert::{classify, AlertLevel},
    db::{self, registry::ReportStore},
    validate,
};

pub async fn alert(cep: &str) -> Result<()> {
    if !validate::is_valid_cep(cep) {
        bail!("CEP inválido. Deve conter 8 números.");
    }

    let store = ReportStore::new(db::open("alagamentos").await?);
    store.create_table_if_absent().await?;

    let today = Local::now().date_naive();
    let count = store.count_for_day(cep, today).await?;

    match classify(count) {
        AlertLevel::High => {
            println!("\n🚨 Alerta: área com múltiplos relatos de alagamento hoje! Cuidado! 🚨");
        }
        AlertLevel::Low => {
            println!("\nPoucos relatos nesta região hoje, mas mantenha atenção.");
        }
    }

    Ok(())
}
