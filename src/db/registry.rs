//! User registry and flood report stores.

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{Row, SqlitePool};

use crate::record::{FloodLevel, FloodReport, RainIntensity, UserRecord};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Registered citizens, unique by CPF.
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_table_if_absent(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS usuarios (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nome_completo TEXT,
                cpf TEXT UNIQUE,
                tipo_deficiencia TEXT,
                cep TEXT,
                endereco_completo TEXT,
                necessita_resgate INTEGER
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts a user, silently ignoring a CPF that is already registered.
    /// Returns whether a row was actually written.
    pub async fn insert(&self, user: &UserRecord) -> Result<bool> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO usuarios
                (nome_completo, cpf, tipo_deficiencia, cep, endereco_completo, necessita_resgate)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&user.full_name)
        .bind(&user.cpf)
        .bind(&user.disability)
        .bind(&user.cep)
        .bind(&user.address)
        .bind(user.needs_rescue)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_all(&self) -> Result<Vec<UserRecord>> {
        let rows = sqlx::query(
            "SELECT nome_completo, cpf, tipo_deficiencia, cep, endereco_completo, necessita_resgate
             FROM usuarios ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let users = rows
            .iter()
            .map(|row| UserRecord {
                full_name: row.get("nome_completo"),
                cpf: row.get("cpf"),
                disability: row.get("tipo_deficiencia"),
                cep: row.get("cep"),
                address: row.get("endereco_completo"),
                needs_rescue: row.get("necessita_resgate"),
            })
            .collect();

        Ok(users)
    }
}

/// Append-only flood report log.
pub struct ReportStore {
    pool: SqlitePool,
}

impl ReportStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_table_if_absent(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS relatorios_alagamento (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nome_reportante TEXT,
                cpf_reportante TEXT,
                cep_local TEXT,
                endereco_alagado TEXT,
                intensidade_chuva TEXT,
                nivel_inundacao TEXT,
                data_hora_registro TEXT
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn append(&self, report: &FloodReport) -> Result<()> {
        sqlx::query(
            "INSERT INTO relatorios_alagamento
                (nome_reportante, cpf_reportante, cep_local, endereco_alagado,
                 intensidade_chuva, nivel_inundacao, data_hora_registro)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&report.reporter_name)
        .bind(&report.reporter_cpf)
        .bind(&report.cep)
        .bind(&report.address)
        .bind(report.rain_intensity.as_str())
        .bind(report.flood_level.as_str())
        .bind(report.recorded_at.format(TIMESTAMP_FORMAT).to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts reports for the CEP whose timestamp falls on the given
    /// calendar day.
    pub async fn count_for_day(&self, cep: &str, day: NaiveDate) -> Result<i64> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(*) FROM relatorios_alagamento
             WHERE cep_local = ?1 AND data_hora_registro LIKE ?2",
        )
        .bind(cep)
        .bind(format!("{day}%"))
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn list_all(&self) -> Result<Vec<FloodReport>> {
        let rows = sqlx::query(
            "SELECT nome_reportante, cpf_reportante, cep_local, endereco_alagado,
                    intensidade_chuva, nivel_inundacao, data_hora_registro
             FROM relatorios_alagamento ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<FloodReport> {
                let intensity: String = row.get("intensidade_chuva");
                let level: String = row.get("nivel_inundacao");
                let recorded_at: String = row.get("data_hora_registro");

                Ok(FloodReport {
                    reporter_name: row.get("nome_reportante"),
                    reporter_cpf: row.get("cpf_reportante"),
                    cep: row.get("cep_local"),
                    address: row.get("endereco_alagado"),
                    rain_intensity: RainIntensity::from_input(&intensity)
                        .ok_or_else(|| anyhow!("unknown rain intensity: {intensity}"))?,
                    flood_level: FloodLevel::from_input(&level)
                        .ok_or_else(|| anyhow!("unknown flood level: {level}"))?,
                    recorded_at: NaiveDateTime::parse_from_str(&recorded_at, TIMESTAMP_FORMAT)?,
                })
            })
            .collect()
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::db::open_in_memory;

    fn user(cpf: &str) -> UserRecord {
        UserRecord {
            full_name: "Maria da Silva".to_string(),
            cpf: cpf.to_string(),
            disability: "Nenhuma".to_string(),
            cep: "01310100".to_string(),
            address: "Avenida Paulista, Bela Vista, São Paulo - SP".to_string(),
            needs_rescue: false,
        }
    }

    fn report(cep: &str, recorded_at: &str) -> FloodReport {
        FloodReport {
            reporter_name: "João Souza".to_string(),
            reporter_cpf: "12345678901".to_string(),
            cep: cep.to_string(),
            address: "Rua Augusta, Consolação, São Paulo - SP".to_string(),
            rain_intensity: RainIntensity::Strong,
            flood_level: FloodLevel::High,
            recorded_at: NaiveDateTime::parse_from_str(recorded_at, TIMESTAMP_FORMAT).unwrap(),
        }
    }

    #[tokio::test]
    async fn should_ignore_duplicate_cpf_registration() {
        let store = UserStore::new(open_in_memory().await.unwrap());
        store.create_table_if_absent().await.unwrap();

        let first = user("12345678901");
        let mut second = user("12345678901");
        second.full_name = "Outro Nome".to_string();

        assert!(store.insert(&first).await.unwrap());
        assert!(!store.insert(&second).await.unwrap());

        let users = store.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].full_name, "Maria da Silva");
    }

    #[tokio::test]
    async fn should_count_only_same_day_same_cep_reports() {
        let store = ReportStore::new(open_in_memory().await.unwrap());
        store.create_table_if_absent().await.unwrap();

        store.append(&report("01310100", "2023-03-15 08:00:00")).await.unwrap();
        store.append(&report("01310100", "2023-03-15 21:45:10")).await.unwrap();
        store.append(&report("01310100", "2023-03-14 23:59:59")).await.unwrap();
        store.append(&report("04538132", "2023-03-15 12:00:00")).await.unwrap();

        let day = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        let count = store.count_for_day("01310100", day).await.unwrap();

        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn should_round_trip_flood_reports() {
        let store = ReportStore::new(open_in_memory().await.unwrap());
        store.create_table_if_absent().await.unwrap();

        let original = report("01310100", "2023-03-15 08:00:00");
        store.append(&original).await.unwrap();

        let reports = store.list_all().await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].rain_intensity, RainIntensity::Strong);
        assert_eq!(reports[0].flood_level, FloodLevel::High);
        assert_eq!(reports[0].recorded_at, original.recorded_at);
    }
}
