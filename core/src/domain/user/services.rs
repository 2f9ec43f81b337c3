use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::ports::{DetectionRecordRepository, DiseaseInfoRepository, ImageClassifier},
    health::ports::HealthCheckRepository,
    marketplace::ports::{CategoryRepository, CropListingRepository},
    otp::ports::{OtpRepository, SmsSender},
    storage::ports::ObjectStoragePort,
    user::{
        entities::{AuthToken, User},
        ports::{PasswordHasher, TokenIssuer, UserRepository, UserService},
        value_objects::{CreateUserRequest, LoginInput, UpdateProfileRequest},
    },
};

impl<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI> UserService
    for Service<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI>
where
    U: UserRepository,
    O: OtpRepository,
    D: DetectionRecordRepository,
    DI: DiseaseInfoRepository,
    HC: HealthCheckRepository,
    MR: CropListingRepository,
    CT: CategoryRepository,
    H: PasswordHasher,
    CL: ImageClassifier,
    SM: SmsSender,
    OS: ObjectStoragePort,
    TI: TokenIssuer,
{
    async fn register(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let password_hash = self.hasher.hash_password(&request.password)?;

        let user = User::new(
            request.phone,
            password_hash,
            request.first_name,
            request.last_name,
            request.citizenship_number,
            request.province,
            request.district,
            request.municipality,
            request.ward_number,
            request.preferred_language,
        );

        self.user_repository.create_user(user).await
    }

    async fn login(&self, input: LoginInput) -> Result<AuthToken, CoreError> {
        let user = self
            .user_repository
            .get_by_phone(input.phone)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        if !self
            .hasher
            .verify_password(&input.password, &user.password_hash)?
        {
            return Err(CoreError::InvalidCredentials);
        }

        self.token_issuer.issue(&user)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        mut request: UpdateProfileRequest,
    ) -> Result<User, CoreError> {
        if let Some(password) = request.password.take() {
            let password_hash = self.hasher.hash_password(&password)?;
            self.user_repository
                .update_password(user_id, password_hash)
                .await?;
        }

        self.user_repository.update_profile(user_id, request).await
    }
}
