use anyhow::Result;

use crate::{
    cli::prompt,
    db::{self, registry::UserStore},
    record::UserRecord,
    validate,
};

use super::prompt_cep_until_resolved;

pub async fn register() -> Result<()> {
    let full_name = prompt::read_line("Digite o nome completo:")?;
    let cpf = prompt::read_until_valid(
        "Digite o CPF (somente números):",
        "CPF inválido. Tente novamente:",
        validate::is_valid_cpf,
    )?;

    let (disability, needs_rescue) =
        if prompt::read_yes_no("Você possui alguma deficiência? (sim/não):")? {
            let disability = prompt::read_line("Qual o tipo de deficiência?")?;
            let needs_rescue = prompt::read_yes_no("Precisa de suporte da Defesa Civil? (sim/não):")?;
            (disability, needs_rescue)
        } else {
            ("Nenhuma".to_string(), false)
        };

    let (cep, address) = prompt_cep_until_resolved("Digite o CEP (somente números):").await?;

    let store = UserStore::new(db::open("usuarios").await?);
    store.create_table_if_absent().await?;

    let inserted = store
        .insert(&UserRecord {
            full_name,
            cpf,
            disability,
            cep,
            address,
            needs_rescue,
        })
        .await?;

    if inserted {
        println!("\nUsuário cadastrado com sucesso!");
    } else {
        println!("\nCPF já cadastrado; o registro existente foi mantido.");
    }

    Ok(())
}
