use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, Func},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        detection::{
            entities::{DiseaseInfo, Product},
            ports::DiseaseInfoRepository,
        },
    },
    entity::{disease_infos, products},
};

#[derive(Debug, Clone)]
pub struct PostgresDiseaseInfoRepository {
    pub db: DatabaseConnection,
}

impl PostgresDiseaseInfoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DiseaseInfoRepository for PostgresDiseaseInfoRepository {
    async fn find_by_crop_and_name(
        &self,
        crop: String,
        name: String,
    ) -> Result<Option<DiseaseInfo>, CoreError> {
        // Matches on lower() so label casing never matters. Ordering by id
        // makes the lookup deterministic if duplicates predate the unique
        // index.
        let info = disease_infos::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(disease_infos::Column::Crop)))
                    .eq(crop.to_lowercase()),
            )
            .filter(
                Expr::expr(Func::lower(Expr::col(disease_infos::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .order_by_asc(disease_infos::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up disease info: {}", e);
                CoreError::InternalServerError
            })?
            .map(DiseaseInfo::from);

        Ok(info)
    }

    async fn get_products(&self, disease_id: Uuid) -> Result<Vec<Product>, CoreError> {
        let rows = products::Entity::find()
            .filter(products::Column::DiseaseId.eq(disease_id))
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Product::from)
            .collect();

        Ok(rows)
    }
}
