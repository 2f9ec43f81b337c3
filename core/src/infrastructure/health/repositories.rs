use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, sea_orm::DbErr> {
        let start = Instant::now();

        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;

        Ok(start.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self.ping().await {
            Ok(latency_ms) => Ok(DatabaseHealthStatus {
                reachable: true,
                latency_ms,
            }),
            Err(e) => {
                error!("Database readiness probe failed: {}", e);
                Ok(DatabaseHealthStatus {
                    reachable: false,
                    latency_ms: 0,
                })
            }
        }
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await.map_err(|e| {
            error!("Database health probe failed: {}", e);
            CoreError::InternalServerError
        })
    }
}
