pub mod category_repository;
pub mod crop_listing_repository;
