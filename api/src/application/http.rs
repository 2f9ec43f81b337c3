pub mod detection;
pub mod health;
pub mod marketplace;
pub mod otp;
pub mod server;
pub mod user;
