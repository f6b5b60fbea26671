use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::PathBuf, sync::Arc};
use tokio::fs;

use crate::store::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

pub type DbPool = PgPool;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Executes the SQL files in `migrations/` in filename order.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let mut entries = fs::read_dir("migrations").await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        tracing::debug!(file = %file.display(), "applying migration");
        let sql = fs::read_to_string(&file).await?;
        // Prepared statements cannot hold multiple commands.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            conn.execute(Statement::from_string(backend, format!("{stmt};")))
                .await?;
        }
    }

    Ok(())
}

/// Connects the Postgres document store, or falls back to the in-memory one
/// when no database is configured.
pub async fn connect_store(database_url: Option<&str>) -> Result<Arc<dyn DocumentStore>> {
    match database_url {
        Some(url) => {
            let orm = create_orm_conn(url).await?;
            run_migrations(&orm).await?;
            let pool = create_pool(url).await?;
            Ok(Arc::new(PgDocumentStore::new(pool, orm)))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, user data is kept in memory only");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}
