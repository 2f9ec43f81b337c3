use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        detection::{entities::DetectionRecord, ports::DetectionRecordRepository},
    },
    entity::detection_records::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDetectionRecordRepository {
    pub db: DatabaseConnection,
}

impl PostgresDetectionRecordRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DetectionRecordRepository for PostgresDetectionRecordRepository {
    async fn create(&self, record: DetectionRecord) -> Result<DetectionRecord, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            image_key: Set(record.image_key),
            detected_disease: Set(record.detected_disease),
            detected_at: Set(record.detected_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(DetectionRecord::from)
        .map_err(|e| {
            error!("Failed to create detection record: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<DetectionRecord>, CoreError> {
        let records = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::DetectedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch detection history: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(DetectionRecord::from)
            .collect();

        Ok(records)
    }

    async fn get_all(&self) -> Result<Vec<DetectionRecord>, CoreError> {
        let records = Entity::find()
            .order_by_desc(Column::DetectedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch detection records: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(DetectionRecord::from)
            .collect();

        Ok(records)
    }
}
