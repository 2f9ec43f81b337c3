use serde::{Deserialize, Serialize};
use smartkheti_core::domain::user::entities::PreferredLanguage;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterUserValidator {
    #[validate(length(min = 7, max = 20, message = "phone must be between 7 and 20 characters"))]
    pub phone: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,

    pub citizenship_number: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub municipality: Option<String>,
    pub ward_number: Option<i16>,
    pub preferred_language: Option<PreferredLanguage>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginUserValidator {
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate, Default)]
pub struct UpdateProfileValidator {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: Option<String>,

    pub citizenship_number: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub municipality: Option<String>,
    pub ward_number: Option<i16>,
    pub preferred_language: Option<PreferredLanguage>,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
}
