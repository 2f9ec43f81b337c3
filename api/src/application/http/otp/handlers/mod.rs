pub mod request_otp;
pub mod verify_otp;
