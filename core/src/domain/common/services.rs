use crate::domain::{
    common::SmartKhetiConfig,
    detection::ports::{DetectionRecordRepository, DiseaseInfoRepository, ImageClassifier},
    health::ports::HealthCheckRepository,
    marketplace::ports::{CategoryRepository, CropListingRepository},
    otp::ports::{OtpRepository, SmsSender},
    storage::ports::ObjectStoragePort,
    user::ports::{PasswordHasher, TokenIssuer, UserRepository},
};

/// Aggregate service over all ports. Domain service traits are implemented
/// on this struct, one module at a time, so every handler talks to a single
/// injected object and tests can swap any port for a mock.
#[derive(Clone)]
pub struct Service<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI>
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
    pub user_repository: U,
    pub otp_repository: O,
    pub detection_repository: D,
    pub disease_info_repository: DI,
    pub health_check_repository: HC,
    pub crop_listing_repository: MR,
    pub category_repository: CT,
    pub hasher: H,
    pub classifier: CL,
    pub sms_sender: SM,
    pub object_storage: OS,
    pub token_issuer: TI,
    pub config: SmartKhetiConfig,
}

impl<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI> Service<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        otp_repository: O,
        detection_repository: D,
        disease_info_repository: DI,
        health_check_repository: HC,
        crop_listing_repository: MR,
        category_repository: CT,
        hasher: H,
        classifier: CL,
        sms_sender: SM,
        object_storage: OS,
        token_issuer: TI,
        config: SmartKhetiConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_repository,
            detection_repository,
            disease_info_repository,
            health_check_repository,
            crop_listing_repository,
            category_repository,
            hasher,
            classifier,
            sms_sender,
            object_storage,
            token_issuer,
            config,
        }
    }
}
