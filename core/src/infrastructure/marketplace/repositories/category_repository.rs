use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        marketplace::{entities::Category, ports::CategoryRepository},
    },
    entity::categories,
};

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn get_by_name(&self, name: String) -> Result<Option<Category>, CoreError> {
        let category = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up category: {}", e);
                CoreError::InternalServerError
            })?
            .map(Category::from);

        Ok(category)
    }

    async fn list(&self) -> Result<Vec<Category>, CoreError> {
        let categories = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list categories: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Category::from)
            .collect();

        Ok(categories)
    }
}
