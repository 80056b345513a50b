//! Nominatim geocoding of a CEP to coordinates.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

// Nominatim requires an identifying User-Agent.
const USER_AGENT: &str = "pluviometria_app";

#[derive(Debug, Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
}

/// Geocodes a CEP to (latitude, longitude). Unresolved locations and
/// service failures both yield `None`; callers must abort the flow rather
/// than fall back to a default coordinate.
pub async fn lat_lon_for_cep(cep: &str) -> Option<(f64, f64)> {
    match try_lat_lon(cep).await {
        Ok(coords) => coords,
        Err(err) => {
            eprintln!("Erro no serviço de geolocalização: {err}");
            None
        }
    }
}

async fn try_lat_lon(cep: &str) -> Result<Option<(f64, f64)>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()?;

    let response = client
        .get(NOMINATIM_URL)
        .query(&[
            ("q", format!("{cep}, Brazil").as_str()),
            ("format", "json"),
            ("limit", "1"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let hits: Vec<NominatimHit> = response.json().await?;

    Ok(hits.first().and_then(parse_hit))
}

fn parse_hit(hit: &NominatimHit) -> Option<(f64, f64)> {
    let lat = hit.lat.parse().ok()?;
    let lon = hit.lon.parse().ok()?;

    Some((lat, lon))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_coordinates_from_hit() {
        let hits: Vec<NominatimHit> = serde_json::from_str(
            r#"[{"lat": "-23.5613", "lon": "-46.6565", "display_name": "Avenida Paulista"}]"#,
        )
        .unwrap();

        assert_eq!(parse_hit(&hits[0]), Some((-23.5613, -46.6565)));
    }

    #[test]
    fn should_reject_malformed_coordinates() {
        let hit = NominatimHit {
            lat: "not-a-number".to_string(),
            lon: "-46.6565".to_string(),
        };

        assert_eq!(parse_hit(&hit), None);
    }
}
