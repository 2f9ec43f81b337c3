use std::time::Duration;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    detection::ports::{DetectionRecordRepository, DiseaseInfoRepository, ImageClassifier},
    health::ports::HealthCheckRepository,
    marketplace::{
        entities::{Category, CropListing},
        ports::{CategoryRepository, CropListingRepository, MarketplaceService},
        value_objects::{
            CreateListingInput, CropListingView, ListingImageUpload, UpdateListingInput,
        },
    },
    otp::ports::{OtpRepository, SmsSender},
    storage::ports::ObjectStoragePort,
    user::{
        entities::User,
        ports::{PasswordHasher, TokenIssuer, UserRepository},
    },
};

/// Lifetime of presigned photo URLs embedded in listing responses.
const MEDIA_URL_TTL: Duration = Duration::from_secs(3600);

impl<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI> Service<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI>
where
    U: UserRepository,
    O: OtpRepository,
    D: DetectionRecordRepository,
    DI: DiseaseInfoRepository,
    HC: HealthCheckRepository,
    MR: CropListingRepository,
    CT: CategoryRepository,
    H: PasswordHasher,
    CL: ImageClassifier,
    SM: SmsSender,
    OS: ObjectStoragePort,
    TI: TokenIssuer,
{
    async fn to_listing_view(&self, listing: CropListing) -> Result<CropListingView, CoreError> {
        let mut images = Vec::with_capacity(listing.image_keys.len());
        for key in &listing.image_keys {
            let url = self.object_storage.presign_get_url(key, MEDIA_URL_TTL).await?;
            images.push(url.url);
        }

        Ok(CropListingView {
            id: listing.id,
            farmer: listing.farmer_name,
            crop_name: listing.crop_name,
            category: listing.category,
            quantity: listing.quantity,
            rate: listing.rate,
            location: listing.location,
            contact_number: listing.contact_number,
            optional_contact: listing.optional_contact,
            description: listing.description,
            posted_at: listing.posted_at,
            images,
        })
    }

    async fn to_listing_views(
        &self,
        listings: Vec<CropListing>,
    ) -> Result<Vec<CropListingView>, CoreError> {
        let mut views = Vec::with_capacity(listings.len());
        for listing in listings {
            views.push(self.to_listing_view(listing).await?);
        }
        Ok(views)
    }

    async fn store_listing_images(
        &self,
        images: Vec<ListingImageUpload>,
    ) -> Result<Vec<String>, CoreError> {
        let mut keys = Vec::with_capacity(images.len());
        for image in images {
            let key = format!("marketplace/{}", generate_uuid_v7());
            self.object_storage
                .put_object(&key, Bytes::from(image.data), &image.content_type)
                .await?;
            keys.push(key);
        }
        Ok(keys)
    }

    async fn resolve_category(&self, name: Option<String>) -> Result<Option<Category>, CoreError> {
        match name {
            None => Ok(None),
            Some(name) => {
                let category = self
                    .category_repository
                    .get_by_name(name)
                    .await?
                    .ok_or_else(|| CoreError::Invalid("unknown category".to_string()))?;
                Ok(Some(category))
            }
        }
    }
}

impl<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI> MarketplaceService
    for Service<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI>
where
    U: UserRepository,
    O: OtpRepository,
    D: DetectionRecordRepository,
    DI: DiseaseInfoRepository,
    HC: HealthCheckRepository,
    MR: CropListingRepository,
    CT: CategoryRepository,
    H: PasswordHasher,
    CL: ImageClassifier,
    SM: SmsSender,
    OS: ObjectStoragePort,
    TI: TokenIssuer,
{
    async fn create_listing(
        &self,
        user: User,
        input: CreateListingInput,
    ) -> Result<CropListingView, CoreError> {
        // Resolve the category before touching storage so a bad name costs
        // nothing.
        let category = self.resolve_category(input.category).await?;
        let image_keys = self.store_listing_images(input.images).await?;

        let farmer_name = format!("{} {}", user.first_name, user.last_name)
            .trim()
            .to_string();

        let listing = CropListing::new(
            user.id,
            farmer_name,
            input.crop_name,
            category.as_ref().map(|c| c.id),
            category.map(|c| c.name),
            input.quantity,
            input.rate,
            input.location,
            input.contact_number,
            input.optional_contact,
            input.description,
            image_keys,
        );

        let created = self.crop_listing_repository.create(listing).await?;

        info!(listing_id = %created.id, "crop listing created");

        self.to_listing_view(created).await
    }

    async fn get_listing(&self, listing_id: Uuid) -> Result<CropListingView, CoreError> {
        let listing = self
            .crop_listing_repository
            .get_by_id(listing_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.to_listing_view(listing).await
    }

    async fn list_listings(
        &self,
        search: Option<String>,
    ) -> Result<Vec<CropListingView>, CoreError> {
        let listings = self.crop_listing_repository.list(search).await?;
        self.to_listing_views(listings).await
    }

    async fn my_listings(&self, user: User) -> Result<Vec<CropListingView>, CoreError> {
        let listings = self.crop_listing_repository.list_by_farmer(user.id).await?;
        self.to_listing_views(listings).await
    }

    async fn update_listing(
        &self,
        user: User,
        listing_id: Uuid,
        input: UpdateListingInput,
    ) -> Result<CropListingView, CoreError> {
        let mut listing = self
            .crop_listing_repository
            .get_by_id(listing_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if listing.farmer_id != user.id {
            return Err(CoreError::Forbidden);
        }

        if input.category.is_some() {
            let category = self.resolve_category(input.category).await?;
            listing.category_id = category.as_ref().map(|c| c.id);
            listing.category = category.map(|c| c.name);
        }
        if let Some(crop_name) = input.crop_name {
            listing.crop_name = crop_name;
        }
        if let Some(quantity) = input.quantity {
            listing.quantity = quantity;
        }
        if let Some(rate) = input.rate {
            listing.rate = rate;
        }
        if let Some(location) = input.location {
            listing.location = location;
        }
        if let Some(contact_number) = input.contact_number {
            listing.contact_number = contact_number;
        }
        if let Some(optional_contact) = input.optional_contact {
            listing.optional_contact = Some(optional_contact);
        }
        if let Some(description) = input.description {
            listing.description = description;
        }

        if let Some(images) = input.images {
            for key in &listing.image_keys {
                self.object_storage.delete_object(key).await?;
            }
            listing.image_keys = self.store_listing_images(images).await?;
        }

        let updated = self.crop_listing_repository.update(listing).await?;

        self.to_listing_view(updated).await
    }

    async fn delete_listing(&self, user: User, listing_id: Uuid) -> Result<(), CoreError> {
        let listing = self
            .crop_listing_repository
            .get_by_id(listing_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if listing.farmer_id != user.id {
            return Err(CoreError::Forbidden);
        }

        for key in &listing.image_keys {
            self.object_storage.delete_object(key).await?;
        }

        self.crop_listing_repository.delete(listing_id).await?;

        info!(%listing_id, "crop listing deleted");

        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.category_repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        common::test_config,
        detection::ports::{
            MockDetectionRecordRepository, MockDiseaseInfoRepository, MockImageClassifier,
        },
        health::ports::MockHealthCheckRepository,
        marketplace::ports::{MockCategoryRepository, MockCropListingRepository},
        otp::ports::{MockOtpRepository, MockSmsSender},
        storage::{entities::PresignedUrl, ports::MockObjectStoragePort},
        user::{
            entities::PreferredLanguage,
            ports::{MockPasswordHasher, MockTokenIssuer, MockUserRepository},
        },
    };

    type TestService = Service<
        MockUserRepository,
        MockOtpRepository,
        MockDetectionRecordRepository,
        MockDiseaseInfoRepository,
        MockHealthCheckRepository,
        MockCropListingRepository,
        MockCategoryRepository,
        MockPasswordHasher,
        MockImageClassifier,
        MockSmsSender,
        MockObjectStoragePort,
        MockTokenIssuer,
    >;

    fn service(
        crop_listing_repository: MockCropListingRepository,
        category_repository: MockCategoryRepository,
        object_storage: MockObjectStoragePort,
    ) -> TestService {
        Service::new(
            MockUserRepository::new(),
            MockOtpRepository::new(),
            MockDetectionRecordRepository::new(),
            MockDiseaseInfoRepository::new(),
            MockHealthCheckRepository::new(),
            crop_listing_repository,
            category_repository,
            MockPasswordHasher::new(),
            MockImageClassifier::new(),
            MockSmsSender::new(),
            object_storage,
            MockTokenIssuer::new(),
            test_config(),
        )
    }

    fn farmer() -> User {
        User::new(
            "+9779800000000".into(),
            "$argon2id$stub".into(),
            "Sita".into(),
            "Sharma".into(),
            None,
            None,
            None,
            None,
            None,
            PreferredLanguage::Np,
        )
    }

    fn listing_owned_by(farmer_id: Uuid) -> CropListing {
        CropListing::new(
            farmer_id,
            "Sita Sharma".into(),
            "Tomato".into(),
            None,
            None,
            "50 kg".into(),
            Decimal::new(4500, 2),
            "Bharatpur".into(),
            "+9779800000000".into(),
            None,
            "Fresh tomatoes".into(),
            vec![
                "marketplace/photo-1.jpg".into(),
                "marketplace/photo-2.jpg".into(),
            ],
        )
    }

    fn photo_upload() -> ListingImageUpload {
        ListingImageUpload {
            data: vec![0u8; 16],
            content_type: "image/jpeg".to_string(),
        }
    }

    fn storage_accepting_uploads() -> MockObjectStoragePort {
        let mut object_storage = MockObjectStoragePort::new();
        object_storage
            .expect_put_object()
            .returning(|_, _, _| Box::pin(async { Ok(()) }));
        object_storage.expect_presign_get_url().returning(|key, _| {
            let url = format!("https://minio.local/smartkheti/{key}?sig=abc");
            Box::pin(async move {
                Ok(PresignedUrl {
                    url,
                    expires_in_seconds: 3600,
                })
            })
        });
        object_storage
    }

    fn create_input(category: Option<&str>) -> CreateListingInput {
        CreateListingInput {
            crop_name: "Tomato".into(),
            category: category.map(|c| c.to_string()),
            quantity: "50 kg".into(),
            rate: Decimal::new(4500, 2),
            location: "Bharatpur".into(),
            contact_number: "+9779800000000".into(),
            optional_contact: None,
            description: "Fresh tomatoes".into(),
            images: vec![photo_upload(), photo_upload()],
        }
    }

    #[tokio::test]
    async fn create_listing_uploads_photos_and_resolves_category() {
        let owner = farmer();
        let owner_id = owner.id;

        let mut crop_listing_repository = MockCropListingRepository::new();
        let mut category_repository = MockCategoryRepository::new();

        category_repository
            .expect_get_by_name()
            .withf(|name| name == "Vegetables")
            .returning(|name| {
                Box::pin(async move {
                    Ok(Some(Category {
                        id: Uuid::new_v4(),
                        name,
                    }))
                })
            });
        crop_listing_repository
            .expect_create()
            .times(1)
            .withf(move |listing| {
                listing.farmer_id == owner_id
                    && listing.farmer_name == "Sita Sharma"
                    && listing.category.as_deref() == Some("Vegetables")
                    && listing.image_keys.len() == 2
            })
            .returning(|listing| Box::pin(async move { Ok(listing) }));

        let mut object_storage = MockObjectStoragePort::new();
        object_storage
            .expect_put_object()
            .times(2)
            .returning(|_, _, _| Box::pin(async { Ok(()) }));
        object_storage.expect_presign_get_url().returning(|key, _| {
            let url = format!("https://minio.local/smartkheti/{key}?sig=abc");
            Box::pin(async move {
                Ok(PresignedUrl {
                    url,
                    expires_in_seconds: 3600,
                })
            })
        });

        let service = service(crop_listing_repository, category_repository, object_storage);

        let view = service
            .create_listing(owner, create_input(Some("Vegetables")))
            .await
            .unwrap();

        assert_eq!(view.farmer, "Sita Sharma");
        assert_eq!(view.images.len(), 2);
        assert!(view.images[0].starts_with("https://"));
    }

    #[tokio::test]
    async fn create_listing_with_unknown_category_stores_nothing() {
        let mut crop_listing_repository = MockCropListingRepository::new();
        let mut category_repository = MockCategoryRepository::new();

        category_repository
            .expect_get_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        crop_listing_repository.expect_create().times(0);

        let mut object_storage = MockObjectStoragePort::new();
        object_storage.expect_put_object().times(0);

        let service = service(crop_listing_repository, category_repository, object_storage);

        let result = service
            .create_listing(farmer(), create_input(Some("Spaceships")))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn update_listing_by_non_owner_is_forbidden() {
        let mut crop_listing_repository = MockCropListingRepository::new();

        crop_listing_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(Some(listing_owned_by(Uuid::new_v4()))) }));
        crop_listing_repository.expect_update().times(0);

        let service = service(
            crop_listing_repository,
            MockCategoryRepository::new(),
            MockObjectStoragePort::new(),
        );

        let result = service
            .update_listing(farmer(), Uuid::new_v4(), UpdateListingInput::default())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::Forbidden);
    }

    #[tokio::test]
    async fn update_listing_with_new_photos_replaces_stored_ones() {
        let owner = farmer();
        let owner_id = owner.id;

        let mut crop_listing_repository = MockCropListingRepository::new();
        crop_listing_repository
            .expect_get_by_id()
            .returning(move |_| Box::pin(async move { Ok(Some(listing_owned_by(owner_id))) }));
        crop_listing_repository
            .expect_update()
            .times(1)
            .withf(|listing| {
                listing.image_keys.len() == 1
                    && !listing.image_keys.contains(&"marketplace/photo-1.jpg".to_string())
            })
            .returning(|listing| Box::pin(async move { Ok(listing) }));

        let mut object_storage = MockObjectStoragePort::new();
        object_storage
            .expect_delete_object()
            .times(2)
            .returning(|_| Box::pin(async { Ok(()) }));
        object_storage
            .expect_put_object()
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(()) }));
        object_storage.expect_presign_get_url().returning(|key, _| {
            let url = format!("https://minio.local/smartkheti/{key}?sig=abc");
            Box::pin(async move {
                Ok(PresignedUrl {
                    url,
                    expires_in_seconds: 3600,
                })
            })
        });

        let service = service(
            crop_listing_repository,
            MockCategoryRepository::new(),
            object_storage,
        );

        let view = service
            .update_listing(
                owner,
                Uuid::new_v4(),
                UpdateListingInput {
                    images: Some(vec![photo_upload()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(view.images.len(), 1);
    }

    #[tokio::test]
    async fn delete_listing_removes_stored_photos() {
        let owner = farmer();
        let owner_id = owner.id;

        let mut crop_listing_repository = MockCropListingRepository::new();
        crop_listing_repository
            .expect_get_by_id()
            .returning(move |_| Box::pin(async move { Ok(Some(listing_owned_by(owner_id))) }));
        crop_listing_repository
            .expect_delete()
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let mut object_storage = MockObjectStoragePort::new();
        object_storage
            .expect_delete_object()
            .times(2)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = service(
            crop_listing_repository,
            MockCategoryRepository::new(),
            object_storage,
        );

        service
            .delete_listing(owner, Uuid::new_v4())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_listing_by_non_owner_keeps_everything() {
        let mut crop_listing_repository = MockCropListingRepository::new();
        crop_listing_repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(Some(listing_owned_by(Uuid::new_v4()))) }));
        crop_listing_repository.expect_delete().times(0);

        let mut object_storage = MockObjectStoragePort::new();
        object_storage.expect_delete_object().times(0);

        let service = service(
            crop_listing_repository,
            MockCategoryRepository::new(),
            object_storage,
        );

        let result = service.delete_listing(farmer(), Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err(), CoreError::Forbidden);
    }

    #[tokio::test]
    async fn search_results_carry_presigned_photo_urls() {
        let mut crop_listing_repository = MockCropListingRepository::new();
        crop_listing_repository
            .expect_list()
            .withf(|search| search.as_deref() == Some("tomato"))
            .returning(|_| Box::pin(async { Ok(vec![listing_owned_by(Uuid::new_v4())]) }));

        let service = service(
            crop_listing_repository,
            MockCategoryRepository::new(),
            storage_accepting_uploads(),
        );

        let views = service
            .list_listings(Some("tomato".to_string()))
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert!(views[0].images.iter().all(|url| url.starts_with("https://")));
    }
}
