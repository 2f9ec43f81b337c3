use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A registered farmer account. The phone number is the login identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub phone: String,
    #[serde(skip)]
    #[schema(ignore)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub citizenship_number: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub municipality: Option<String>,
    pub ward_number: Option<i16>,
    pub profile_photo_key: Option<String>,
    pub preferred_language: PreferredLanguage,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PreferredLanguage {
    En,
    Np,
}

impl PreferredLanguage {
    pub fn as_str(&self) -> &str {
        match self {
            PreferredLanguage::En => "en",
            PreferredLanguage::Np => "np",
        }
    }
}

impl From<&str> for PreferredLanguage {
    fn from(s: &str) -> Self {
        match s {
            "en" => PreferredLanguage::En,
            _ => PreferredLanguage::Np,
        }
    }
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        phone: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        citizenship_number: Option<String>,
        province: Option<String>,
        district: Option<String>,
        municipality: Option<String>,
        ward_number: Option<i16>,
        preferred_language: PreferredLanguage,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            phone,
            password_hash,
            first_name,
            last_name,
            citizenship_number,
            province,
            district,
            municipality,
            ward_number,
            profile_photo_key: None,
            preferred_language,
            is_staff: false,
            created_at: now,
        }
    }
}

/// Claims carried by an issued access token.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub phone: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
