use serde::Serialize;
use utoipa::ToSchema;

/// Time-limited absolute URL to an object in the media bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PresignedUrl {
    pub url: String,
    pub expires_in_seconds: u64,
}
