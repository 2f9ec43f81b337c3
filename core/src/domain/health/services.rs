use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    detection::ports::{DetectionRecordRepository, DiseaseInfoRepository, ImageClassifier},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    marketplace::ports::{CategoryRepository, CropListingRepository},
    otp::ports::{OtpRepository, SmsSender},
    storage::ports::ObjectStoragePort,
    user::ports::{PasswordHasher, TokenIssuer, UserRepository},
};

impl<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI> HealthCheckService
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
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
