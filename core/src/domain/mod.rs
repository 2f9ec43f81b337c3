pub mod common;
pub mod detection;
pub mod health;
pub mod marketplace;
pub mod otp;
pub mod storage;
pub mod user;
