//! SQLite persistence.
//!
//! Each flow keeps its own database file, matching the deployed layout:
//! the user registry, the flood report log, and one file per analysis
//! granularity. Pools are opened per run and passed down explicitly.

pub mod analysis;
pub mod registry;

use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};

/// Opens (creating if absent) the named database file in the working
/// directory and returns a connection pool scoped to the current run.
pub async fn open(db_name: &str) -> Result<SqlitePool> {
    let database_url = format!("sqlite://{db_name}.sqlite");

    if !Sqlite::database_exists(&database_url)
        .await
        .unwrap_or(false)
    {
        Sqlite::create_database(&database_url).await?;
    }

    let pool = SqlitePool::connect(&database_url).await?;

    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn open_in_memory() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    Ok(pool)
}
