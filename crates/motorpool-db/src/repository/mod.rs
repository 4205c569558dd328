//! SQLite repository implementation

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::DbError;

// Submodules
mod users;
mod vehicles;

/// Database connection and operations
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    /// Serializes next-id assignment across concurrent vehicle creates
    vehicle_writes: Arc<Mutex<()>>,
}

impl Database {
    /// Create a new database connection
    ///
    /// Acquiring a connection past `acquire_timeout` fails with
    /// [`DbError::Connection`] instead of waiting indefinitely.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, DbError> {
        info!("Connecting to database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;
        Self::from_pool(pool).await
    }

    /// Create a private in-memory database
    ///
    /// An in-memory SQLite database lives inside a single connection, so the
    /// pool is pinned to exactly one connection that never expires.
    pub async fn in_memory() -> Result<Self, DbError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, DbError> {
        let db = Self {
            pool,
            vehicle_writes: Arc::new(Mutex::new(())),
        };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), DbError> {
        info!("Running database migrations");

        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id INTEGER PRIMARY KEY,
                brand TEXT NOT NULL,
                model TEXT NOT NULL,
                year INTEGER NOT NULL
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_vehicles_brand ON vehicles(brand)",
            "CREATE INDEX IF NOT EXISTS idx_vehicles_model ON vehicles(model)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DbError::Migration(e.to_string()))?;
        }

        info!("Database migrations completed");
        Ok(())
    }
}
