use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    marketplace::{
        entities::{Category, CropListing},
        value_objects::{CreateListingInput, CropListingView, UpdateListingInput},
    },
    user::entities::User,
};

/// Repository trait for crop listings and their photo rows
#[cfg_attr(test, mockall::automock)]
pub trait CropListingRepository: Send + Sync {
    fn create(
        &self,
        listing: CropListing,
    ) -> impl Future<Output = Result<CropListing, CoreError>> + Send;

    fn get_by_id(
        &self,
        listing_id: Uuid,
    ) -> impl Future<Output = Result<Option<CropListing>, CoreError>> + Send;

    /// Every listing, newest first. `search` filters on crop name, location
    /// or description, case-insensitively.
    fn list(
        &self,
        search: Option<String>,
    ) -> impl Future<Output = Result<Vec<CropListing>, CoreError>> + Send;

    fn list_by_farmer(
        &self,
        farmer_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CropListing>, CoreError>> + Send;

    /// Persists the row and syncs the photo rows to `image_keys`.
    fn update(
        &self,
        listing: CropListing,
    ) -> impl Future<Output = Result<CropListing, CoreError>> + Send;

    fn delete(&self, listing_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for the seeded category table
#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;
}

/// Service trait for the crop marketplace
#[cfg_attr(test, mockall::automock)]
pub trait MarketplaceService: Send + Sync {
    fn create_listing(
        &self,
        user: User,
        input: CreateListingInput,
    ) -> impl Future<Output = Result<CropListingView, CoreError>> + Send;

    fn get_listing(
        &self,
        listing_id: Uuid,
    ) -> impl Future<Output = Result<CropListingView, CoreError>> + Send;

    fn list_listings(
        &self,
        search: Option<String>,
    ) -> impl Future<Output = Result<Vec<CropListingView>, CoreError>> + Send;

    fn my_listings(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Vec<CropListingView>, CoreError>> + Send;

    /// Owner only; other callers get `Forbidden`.
    fn update_listing(
        &self,
        user: User,
        listing_id: Uuid,
        input: UpdateListingInput,
    ) -> impl Future<Output = Result<CropListingView, CoreError>> + Send;

    /// Owner only. Removes the stored photos along with the row.
    fn delete_listing(
        &self,
        user: User,
        listing_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, CoreError>> + Send;
}
