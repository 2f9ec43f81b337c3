use crate::{
    domain::common::{SmartKhetiConfig, services::Service},
    infrastructure::{
        auth::jwt_issuer::JwtTokenIssuer,
        classifier::tract_classifier::TractImageClassifier,
        crypto::argon2_hasher::Argon2Hasher,
        db::postgres::Postgres,
        detection::repositories::{
            detection_record_repository::PostgresDetectionRecordRepository,
            disease_info_repository::PostgresDiseaseInfoRepository,
        },
        health::repositories::PostgresHealthCheckRepository,
        marketplace::repositories::{
            category_repository::PostgresCategoryRepository,
            crop_listing_repository::PostgresCropListingRepository,
        },
        object_storage::minio::MinioObjectStorage,
        otp::repositories::otp_repository::PostgresOtpRepository,
        sms::log_sender::LogSmsSender,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

/// The concrete service wired against postgres, argon2, tract and MinIO.
pub type SmartKhetiService = Service<
    PostgresUserRepository,
    PostgresOtpRepository,
    PostgresDetectionRecordRepository,
    PostgresDiseaseInfoRepository,
    PostgresHealthCheckRepository,
    PostgresCropListingRepository,
    PostgresCategoryRepository,
    Argon2Hasher,
    TractImageClassifier,
    LogSmsSender,
    MinioObjectStorage,
    JwtTokenIssuer,
>;

pub async fn create_service(config: SmartKhetiConfig) -> Result<SmartKhetiService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    let classifier = TractImageClassifier::new(&config.classifier)?;
    let object_storage = MinioObjectStorage::new(&config.object_storage).await;
    let token_issuer = JwtTokenIssuer::new(&config.auth);

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresOtpRepository::new(db.clone()),
        PostgresDetectionRecordRepository::new(db.clone()),
        PostgresDiseaseInfoRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db.clone()),
        PostgresCropListingRepository::new(db.clone()),
        PostgresCategoryRepository::new(db),
        Argon2Hasher,
        classifier,
        LogSmsSender,
        object_storage,
        token_issuer,
        config,
    ))
}
