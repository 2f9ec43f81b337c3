use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        otp::{entities::OtpRequest, ports::OtpRepository},
    },
    entity::otp_requests::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresOtpRepository {
    pub db: DatabaseConnection,
}

impl PostgresOtpRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl OtpRepository for PostgresOtpRepository {
    async fn create(&self, request: OtpRequest) -> Result<OtpRequest, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(request.id),
            phone: Set(request.phone),
            code: Set(request.code),
            created_at: Set(request.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(OtpRequest::from)
        .map_err(|e| {
            error!("Failed to create OTP request: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn find_latest_by_phone_and_code(
        &self,
        phone: String,
        code: String,
    ) -> Result<Option<OtpRequest>, CoreError> {
        let row = Entity::find()
            .filter(Column::Phone.eq(phone))
            .filter(Column::Code.eq(code))
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up OTP request: {}", e);
                CoreError::InternalServerError
            })?
            .map(OtpRequest::from);

        Ok(row)
    }

    async fn delete_latest_by_phone(&self, phone: String) -> Result<(), CoreError> {
        // Two statements on purpose: only the newest row is removed, older
        // stale rows stay behind.
        let latest = Entity::find()
            .filter(Column::Phone.eq(phone))
            .order_by_desc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find latest OTP request: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(row) = latest {
            Entity::delete_by_id(row.id)
                .exec(&self.db)
                .await
                .map_err(|e| {
                    error!("Failed to delete OTP request: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        Ok(())
    }
}
