use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    SqlErr, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository, value_objects::UpdateProfileRequest},
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_err(e: sea_orm::DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CoreError::Conflict("phone or citizenship number already registered".to_string())
        }
        _ => {
            error!("Failed to create user: {}", e);
            CoreError::InternalServerError
        }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let created = Entity::insert(ActiveModel {
            id: Set(user.id),
            phone: Set(user.phone),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            citizenship_number: Set(user.citizenship_number),
            province: Set(user.province),
            district: Set(user.district),
            municipality: Set(user.municipality),
            ward_number: Set(user.ward_number),
            profile_photo_key: Set(user.profile_photo_key),
            preferred_language: Set(user.preferred_language.as_str().to_string()),
            is_staff: Set(user.is_staff),
            created_at: Set(user.created_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(User::from)
        .map_err(map_insert_err)?;

        Ok(created)
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_phone(&self, phone: String) -> Result<Option<User>, CoreError> {
        let user = Entity::find()
            .filter(Column::Phone.eq(phone))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by phone: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, CoreError> {
        let model = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch user for update: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let mut active = model.into_active_model();

        if let Some(first_name) = request.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = request.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(citizenship_number) = request.citizenship_number {
            active.citizenship_number = Set(Some(citizenship_number));
        }
        if let Some(province) = request.province {
            active.province = Set(Some(province));
        }
        if let Some(district) = request.district {
            active.district = Set(Some(district));
        }
        if let Some(municipality) = request.municipality {
            active.municipality = Set(Some(municipality));
        }
        if let Some(ward_number) = request.ward_number {
            active.ward_number = Set(Some(ward_number));
        }
        if let Some(preferred_language) = request.preferred_language {
            active.preferred_language = Set(preferred_language.as_str().to_string());
        }

        let updated = Entity::update(active)
            .exec(&self.db)
            .await
            .map(User::from)
            .map_err(map_insert_err)?;

        Ok(updated)
    }

    async fn update_password(&self, user_id: Uuid, password_hash: String) -> Result<(), CoreError> {
        Entity::update_many()
            .col_expr(Column::PasswordHash, Expr::value(password_hash))
            .filter(Column::Id.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update password: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
