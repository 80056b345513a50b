//! ViaCEP address lookup.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const VIACEP_URL: &str = "https://viacep.com.br/ws";

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    erro: Option<bool>,
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    bairro: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    uf: Option<String>,
}

impl ViaCepResponse {
    /// Formats the resolved address as "logradouro, bairro, localidade - uf".
    fn format(&self) -> Option<String> {
        if self.erro.is_some() {
            return None;
        }

        Some(format!(
            "{}, {}, {} - {}",
            self.logradouro.as_deref()?,
            self.bairro.as_deref()?,
            self.localidade.as_deref()?,
            self.uf.as_deref()?,
        ))
    }
}

/// Resolves a CEP to a formatted street address. Any service failure or an
/// unknown CEP yields `None`; the caller decides whether to re-prompt.
pub async fn resolve(cep: &str) -> Option<String> {
    match try_resolve(cep).await {
        Ok(address) => address,
        Err(err) => {
            eprintln!("Erro ao buscar endereço: {err}");
            None
        }
    }
}

async fn try_resolve(cep: &str) -> Result<Option<String>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let url = format!("{VIACEP_URL}/{cep}/json/");
    let response = client.get(url).send().await?.error_for_status()?;
    let payload: ViaCepResponse = response.json().await?;

    Ok(payload.format())
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_resolved_address() {
        let payload: ViaCepResponse = serde_json::from_str(
            r#"{
                "cep": "01310-100",
                "logradouro": "Avenida Paulista",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP"
            }"#,
        )
        .unwrap();

        assert_eq!(
            payload.format().unwrap(),
            "Avenida Paulista, Bela Vista, São Paulo - SP"
        );
    }

    #[test]
    fn should_treat_erro_payload_as_unresolved() {
        let payload: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();

        assert_eq!(payload.format(), None);
    }
}
