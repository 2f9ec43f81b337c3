use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, QueryFilter, QueryOrder,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_uuid_v7},
        marketplace::{entities::CropListing, ports::CropListingRepository},
    },
    entity::{categories, crop_images, crop_listings, users},
    infrastructure::marketplace::mappers::listing_from_rows,
};

#[derive(Debug, Clone)]
pub struct PostgresCropListingRepository {
    pub db: DatabaseConnection,
}

impl PostgresCropListingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_images(&self, listing_id: Uuid, keys: &[String]) -> Result<(), CoreError> {
        if keys.is_empty() {
            return Ok(());
        }

        let rows = keys.iter().map(|key| crop_images::ActiveModel {
            id: Set(generate_uuid_v7()),
            listing_id: Set(listing_id),
            image_key: Set(key.clone()),
        });

        crop_images::Entity::insert_many(rows)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to store listing photo rows: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn hydrate(
        &self,
        models: Vec<crop_listings::Model>,
    ) -> Result<Vec<CropListing>, CoreError> {
        let images = models
            .load_many(crop_images::Entity, &self.db)
            .await
            .map_err(|e| {
                error!("Failed to load listing photos: {}", e);
                CoreError::InternalServerError
            })?;
        let farmers = models
            .load_one(users::Entity, &self.db)
            .await
            .map_err(|e| {
                error!("Failed to load listing owners: {}", e);
                CoreError::InternalServerError
            })?;
        let cats = models
            .load_one(categories::Entity, &self.db)
            .await
            .map_err(|e| {
                error!("Failed to load listing categories: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models
            .iter()
            .zip(images)
            .zip(farmers)
            .zip(cats)
            .map(|(((model, images), farmer), category)| {
                listing_from_rows(model, farmer.as_ref(), category.as_ref(), &images)
            })
            .collect())
    }
}

impl CropListingRepository for PostgresCropListingRepository {
    async fn create(&self, listing: CropListing) -> Result<CropListing, CoreError> {
        let created = crop_listings::Entity::insert(crop_listings::ActiveModel {
            id: Set(listing.id),
            farmer_id: Set(listing.farmer_id),
            category_id: Set(listing.category_id),
            crop_name: Set(listing.crop_name.clone()),
            quantity: Set(listing.quantity.clone()),
            rate: Set(listing.rate),
            location: Set(listing.location.clone()),
            contact_number: Set(listing.contact_number.clone()),
            optional_contact: Set(listing.optional_contact.clone()),
            description: Set(listing.description.clone()),
            posted_at: Set(listing.posted_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create crop listing: {}", e);
            CoreError::InternalServerError
        })?;

        self.insert_images(created.id, &listing.image_keys).await?;

        Ok(CropListing {
            posted_at: created.posted_at.to_utc(),
            ..listing
        })
    }

    async fn get_by_id(&self, listing_id: Uuid) -> Result<Option<CropListing>, CoreError> {
        let Some(model) = crop_listings::Entity::find_by_id(listing_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch crop listing: {}", e);
                CoreError::InternalServerError
            })?
        else {
            return Ok(None);
        };

        let images = model
            .find_related(crop_images::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load listing photos: {}", e);
                CoreError::InternalServerError
            })?;
        let farmer = model
            .find_related(users::Entity)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load listing owner: {}", e);
                CoreError::InternalServerError
            })?;
        let category = model
            .find_related(categories::Entity)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load listing category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Some(listing_from_rows(
            &model,
            farmer.as_ref(),
            category.as_ref(),
            &images,
        )))
    }

    async fn list(&self, search: Option<String>) -> Result<Vec<CropListing>, CoreError> {
        let mut query =
            crop_listings::Entity::find().order_by_desc(crop_listings::Column::PostedAt);

        if let Some(term) = search {
            let pattern = format!("%{term}%");
            query = query.filter(
                Condition::any()
                    .add(Expr::col(crop_listings::Column::CropName).ilike(pattern.clone()))
                    .add(Expr::col(crop_listings::Column::Location).ilike(pattern.clone()))
                    .add(Expr::col(crop_listings::Column::Description).ilike(pattern)),
            );
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list crop listings: {}", e);
            CoreError::InternalServerError
        })?;

        self.hydrate(models).await
    }

    async fn list_by_farmer(&self, farmer_id: Uuid) -> Result<Vec<CropListing>, CoreError> {
        let models = crop_listings::Entity::find()
            .filter(crop_listings::Column::FarmerId.eq(farmer_id))
            .order_by_desc(crop_listings::Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list farmer's crop listings: {}", e);
                CoreError::InternalServerError
            })?;

        self.hydrate(models).await
    }

    async fn update(&self, listing: CropListing) -> Result<CropListing, CoreError> {
        let updated = crop_listings::Entity::update(crop_listings::ActiveModel {
            id: Set(listing.id),
            farmer_id: Set(listing.farmer_id),
            category_id: Set(listing.category_id),
            crop_name: Set(listing.crop_name.clone()),
            quantity: Set(listing.quantity.clone()),
            rate: Set(listing.rate),
            location: Set(listing.location.clone()),
            contact_number: Set(listing.contact_number.clone()),
            optional_contact: Set(listing.optional_contact.clone()),
            description: Set(listing.description.clone()),
            posted_at: Set(listing.posted_at.fixed_offset()),
        })
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to update crop listing: {}", e);
            CoreError::InternalServerError
        })?;

        // Photo rows are synced wholesale; the service decides what the
        // final key set is.
        crop_images::Entity::delete_many()
            .filter(crop_images::Column::ListingId.eq(listing.id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to clear listing photo rows: {}", e);
                CoreError::InternalServerError
            })?;
        self.insert_images(listing.id, &listing.image_keys).await?;

        Ok(CropListing {
            posted_at: updated.posted_at.to_utc(),
            ..listing
        })
    }

    async fn delete(&self, listing_id: Uuid) -> Result<(), CoreError> {
        crop_listings::Entity::delete_by_id(listing_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete crop listing: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
