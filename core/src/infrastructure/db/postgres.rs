use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies pending migrations.
    pub async fn new(config: PostgresConfig) -> Result<Self, CoreError> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            error!("Failed to connect to database: {}", e);
            CoreError::ServiceUnavailable
        })?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                error!("Failed to run migrations: {}", e);
                CoreError::InternalServerError
            })?;

        info!("database connected and migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
