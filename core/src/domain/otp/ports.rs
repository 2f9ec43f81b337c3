use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    otp::{
        entities::OtpRequest,
        value_objects::{RequestOtpInput, VerifyOtpInput},
    },
};

/// Repository trait for issued one-time codes
#[cfg_attr(test, mockall::automock)]
pub trait OtpRepository: Send + Sync {
    fn create(
        &self,
        request: OtpRequest,
    ) -> impl Future<Output = Result<OtpRequest, CoreError>> + Send;

    /// Most recently issued row matching phone and code exactly, if any.
    fn find_latest_by_phone_and_code(
        &self,
        phone: String,
        code: String,
    ) -> impl Future<Output = Result<Option<OtpRequest>, CoreError>> + Send;

    /// Deletes the most recent row for the phone, if one exists. Older stale
    /// rows are left behind; invalidation is best effort.
    fn delete_latest_by_phone(
        &self,
        phone: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Out-of-band delivery of the plaintext code. The HTTP response never
/// carries it.
#[cfg_attr(test, mockall::automock)]
pub trait SmsSender: Send + Sync {
    fn send_otp(
        &self,
        phone: &str,
        code: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for the password-reset OTP lifecycle
#[cfg_attr(test, mockall::automock)]
pub trait OtpService: Send + Sync {
    fn request_otp(
        &self,
        input: RequestOtpInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn verify_otp(&self, input: VerifyOtpInput)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
