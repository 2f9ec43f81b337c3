pub mod categories;
pub mod crop_images;
pub mod crop_listings;
pub mod detection_records;
pub mod disease_infos;
pub mod otp_requests;
pub mod products;
pub mod users;
