pub mod auth;
pub mod classifier;
pub mod crypto;
pub mod db;
pub mod detection;
pub mod health;
pub mod marketplace;
pub mod object_storage;
pub mod otp;
pub mod sms;
pub mod user;
