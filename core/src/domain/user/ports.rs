use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{AuthToken, JwtClaim, User},
        value_objects::{CreateUserRequest, LoginInput, UpdateProfileRequest},
    },
};

/// Repository trait for user accounts
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_phone(
        &self,
        phone: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Password hashing seam; the argon2 adapter lives in infrastructure.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, CoreError>;

    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool, CoreError>;
}

/// Access token issuance and verification
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<AuthToken, CoreError>;

    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}

/// Service trait for account management
#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn register(
        &self,
        request: CreateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<AuthToken, CoreError>> + Send;

    fn get_profile(&self, user_id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
