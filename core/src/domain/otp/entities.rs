use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// How long an issued code stays verifiable.
pub const OTP_VALIDITY_SECONDS: i64 = 120;

/// One issued password-reset code. A new issuance for the same phone
/// supersedes the previous row; superseded and consumed rows are not
/// guaranteed to be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    pub id: Uuid,
    pub phone: String,
    /// Kept as text so leading zeros would survive if the generator ever
    /// produced them.
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl OtpRequest {
    pub fn new(phone: String, code: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            phone,
            code,
            created_at: now,
        }
    }

    /// Whether the code is still inside its validity window at `now`.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.created_at + Duration::seconds(OTP_VALIDITY_SECONDS)
    }
}
