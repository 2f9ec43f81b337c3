use crate::domain::user::entities::PreferredLanguage;

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub phone: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub citizenship_number: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub municipality: Option<String>,
    pub ward_number: Option<i16>,
    pub preferred_language: PreferredLanguage,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub citizenship_number: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub municipality: Option<String>,
    pub ward_number: Option<i16>,
    pub preferred_language: Option<PreferredLanguage>,
    pub password: Option<String>,
}
