//! Precipitation analysis stores, one per granularity.

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use crate::record::{DailySample, MonthlyAggregate, WeeklyAggregate};

/// A persisted daily sample, keyed by CEP.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub cep: String,
    pub date: NaiveDate,
    pub precipitation_mm: f64,
}

/// Raw daily forecast samples.
pub struct DailyStore {
    pool: SqlitePool,
}

impl DailyStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_table_if_absent(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS chuva_semana (
                cep TEXT,
                data TEXT,
                chuva REAL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn append(&self, cep: &str, sample: &DailySample) -> Result<()> {
        sqlx::query("INSERT INTO chuva_semana (cep, data, chuva) VALUES (?1, ?2, ?3)")
            .bind(cep)
            .bind(sample.date.to_string())
            .bind(sample.precipitation_mm)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<DailyRow>> {
        let rows = sqlx::query("SELECT cep, data, chuva FROM chuva_semana")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<DailyRow> {
                let date: String = row.get("data");

                Ok(DailyRow {
                    cep: row.get("cep"),
                    date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")?,
                    precipitation_mm: row.get("chuva"),
                })
            })
            .collect()
    }
}

/// Week-of-month precipitation sums.
pub struct WeeklyStore {
    pool: SqlitePool,
}

impl WeeklyStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_table_if_absent(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS precipitacao_mensal (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cep TEXT,
                ano INTEGER,
                mes INTEGER,
                semana INTEGER,
                precipitacao_mm REAL,
                latitude REAL,
                longitude REAL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn append(&self, aggregate: &WeeklyAggregate) -> Result<()> {
        sqlx::query(
            "INSERT INTO precipitacao_mensal
                (cep, ano, mes, semana, precipitacao_mm, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&aggregate.cep)
        .bind(aggregate.year)
        .bind(aggregate.month)
        .bind(aggregate.week)
        .bind(aggregate.precipitation_mm)
        .bind(aggregate.latitude)
        .bind(aggregate.longitude)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<WeeklyAggregate>> {
        let rows = sqlx::query(
            "SELECT cep, ano, mes, semana, precipitacao_mm, latitude, longitude
             FROM precipitacao_mensal ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let aggregates = rows
            .iter()
            .map(|row| WeeklyAggregate {
                cep: row.get("cep"),
                year: row.get("ano"),
                month: row.get("mes"),
                week: row.get("semana"),
                precipitation_mm: row.get("precipitacao_mm"),
                latitude: row.get("latitude"),
                longitude: row.get("longitude"),
            })
            .collect();

        Ok(aggregates)
    }
}

/// Month-of-year precipitation sums.
pub struct MonthlyStore {
    pool: SqlitePool,
}

impl MonthlyStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_table_if_absent(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS precipitacao_anual (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cep TEXT,
                ano INTEGER,
                mes INTEGER,
                precipitacao_mm REAL,
                latitude REAL,
                longitude REAL
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn append(&self, aggregate: &MonthlyAggregate) -> Result<()> {
        sqlx::query(
            "INSERT INTO precipitacao_anual
                (cep, ano, mes, precipitacao_mm, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&aggregate.cep)
        .bind(aggregate.year)
        .bind(aggregate.month)
        .bind(aggregate.precipitation_mm)
        .bind(aggregate.latitude)
        .bind(aggregate.longitude)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<MonthlyAggregate>> {
        let rows = sqlx::query(
            "SELECT cep, ano, mes, precipitacao_mm, latitude, longitude
             FROM precipitacao_anual ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let aggregates = rows
            .iter()
            .map(|row| MonthlyAggregate {
                cep: row.get("cep"),
                year: row.get("ano"),
                month: row.get("mes"),
                precipitation_mm: row.get("precipitacao_mm"),
                latitude: row.get("latitude"),
                longitude: row.get("longitude"),
            })
            .collect();

        Ok(aggregates)
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    fn weekly(week: u32, mm: f64) -> WeeklyAggregate {
        WeeklyAggregate {
            cep: "01310100".to_string(),
            year: 2023,
            month: 3,
            week,
            precipitation_mm: mm,
            latitude: -23.5613,
            longitude: -46.6565,
        }
    }

    #[tokio::test]
    async fn should_round_trip_daily_samples() {
        let store = DailyStore::new(open_in_memory().await.unwrap());
        store.create_table_if_absent().await.unwrap();

        let sample = DailySample {
            date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            precipitation_mm: 12.5,
        };
        store.append("01310100", &sample).await.unwrap();

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cep, "01310100");
        assert_eq!(rows[0].date, sample.date);
        assert!((rows[0].precipitation_mm - 12.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_append_weekly_aggregates_rather_than_upsert() {
        let store = WeeklyStore::new(open_in_memory().await.unwrap());
        store.create_table_if_absent().await.unwrap();

        store.append(&weekly(1, 10.0)).await.unwrap();
        store.append(&weekly(2, 5.0)).await.unwrap();
        // A second run of the same analysis appends again.
        store.append(&weekly(1, 10.0)).await.unwrap();
        store.append(&weekly(2, 5.0)).await.unwrap();

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], weekly(1, 10.0));
    }

    #[tokio::test]
    async fn should_round_trip_monthly_aggregates() {
        let store = MonthlyStore::new(open_in_memory().await.unwrap());
        store.create_table_if_absent().await.unwrap();

        let aggregate = MonthlyAggregate {
            cep: "01310100".to_string(),
            year: 2022,
            month: 7,
            precipitation_mm: 88.25,
            latitude: -23.5613,
            longitude: -46.6565,
        };
        store.append(&aggregate).await.unwrap();

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows, vec![aggregate]);
    }
}
