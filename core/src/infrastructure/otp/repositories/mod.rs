pub mod otp_repository;
