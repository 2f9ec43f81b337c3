use std::time::Duration;

use bytes::Bytes;
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    detection::{
        entities::DetectionRecord,
        helpers::{argmax, clean_label, split_label},
        ports::{
            DetectionRecordRepository, DetectionService, DiseaseInfoRepository, ImageClassifier,
        },
        value_objects::{
            DetectDiseaseInput, DetectionHistoryEntry, DetectionOutcome, Diagnosis, ProductInfo,
        },
    },
    health::ports::HealthCheckRepository,
    marketplace::ports::{CategoryRepository, CropListingRepository},
    otp::ports::{OtpRepository, SmsSender},
    storage::ports::ObjectStoragePort,
    user::{
        entities::User,
        ports::{PasswordHasher, TokenIssuer, UserRepository},
    },
};

const HEALTHY_MESSAGE: &str = "Your crop looks healthy! Keep monitoring regularly.";
const NO_INFO_MESSAGE: &str = "No detailed info found for this disease.";

/// Lifetime of presigned media URLs embedded in responses.
const MEDIA_URL_TTL: Duration = Duration::from_secs(3600);

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
    async fn to_history_entries(
        &self,
        records: Vec<DetectionRecord>,
    ) -> Result<Vec<DetectionHistoryEntry>, CoreError> {
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            let url = self
                .object_storage
                .presign_get_url(&record.image_key, MEDIA_URL_TTL)
                .await?;

            entries.push(DetectionHistoryEntry {
                id: record.id,
                detected_disease: record.detected_disease,
                detected_at: record.detected_at,
                image_url: url.url,
            });
        }

        Ok(entries)
    }
}

impl<U, O, D, DI, HC, MR, CT, H, CL, SM, OS, TI> DetectionService
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
    async fn detect_disease(
        &self,
        user: User,
        input: DetectDiseaseInput,
    ) -> Result<DetectionOutcome, CoreError> {
        // 1. Run the classifier; decode failures surface before any write.
        let scores = self.classifier.predict(&input.image_data).await?;

        let labels = self.classifier.labels();
        let index = argmax(&scores)
            .ok_or_else(|| CoreError::ShapeMismatch("empty output vector".to_string()))?;
        let raw_label = labels.get(index).ok_or_else(|| {
            CoreError::ShapeMismatch(format!(
                "predicted index {index} outside label list of {}",
                labels.len()
            ))
        })?;

        // 2. Clean the label, then split into (crop, disease name).
        let label = clean_label(raw_label);
        let (crop, disease_name) = split_label(&label);

        // 3. Keep the uploaded image, then persist the record. The record is
        // written regardless of whether the reference lookup below finds
        // anything.
        let image_key = format!("detections/{}", generate_uuid_v7());
        self.object_storage
            .put_object(&image_key, Bytes::from(input.image_data), &input.content_type)
            .await?;

        let record = self
            .detection_repository
            .create(DetectionRecord::new(user.id, image_key, label.clone()))
            .await?;

        // 4. Enrich from the reference table.
        let diagnosis = match self
            .disease_info_repository
            .find_by_crop_and_name(crop.clone(), disease_name.clone())
            .await?
        {
            None => Diagnosis::Unknown {
                detected_disease: label.clone(),
                crop,
                message: NO_INFO_MESSAGE.to_string(),
            },
            Some(info) if info.is_healthy => Diagnosis::Healthy {
                detected_disease: "Healthy".to_string(),
                crop: info.crop,
                message: HEALTHY_MESSAGE.to_string(),
                recheck_advice: info.recheck_advice,
            },
            Some(info) => {
                let products = self.disease_info_repository.get_products(info.id).await?;

                let mut product_infos = Vec::with_capacity(products.len());
                for product in products {
                    let url = self
                        .object_storage
                        .presign_get_url(&product.image_key, MEDIA_URL_TTL)
                        .await?;
                    product_infos.push(ProductInfo {
                        name: product.name,
                        image_url: url.url,
                    });
                }

                Diagnosis::Diseased {
                    detected_disease: info.name,
                    crop: info.crop,
                    short_remedy: info.short_remedy,
                    treatment: info.treatment,
                    recheck_advice: info.recheck_advice,
                    products: product_infos,
                }
            }
        };

        info!(
            record_id = %record.id,
            label = %record.detected_disease,
            "detection recorded"
        );

        Ok(DetectionOutcome { record, diagnosis })
    }

    async fn get_detection_history(
        &self,
        user: User,
    ) -> Result<Vec<DetectionHistoryEntry>, CoreError> {
        let records = self.detection_repository.get_by_user(user.id).await?;
        self.to_history_entries(records).await
    }

    async fn get_all_detections(
        &self,
        user: User,
    ) -> Result<Vec<DetectionHistoryEntry>, CoreError> {
        if !user.is_staff {
            return Err(CoreError::Forbidden);
        }

        let records = self.detection_repository.get_all().await?;
        self.to_history_entries(records).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::test_config,
        detection::{
            entities::{DiseaseInfo, Product},
            ports::{
                MockDetectionRecordRepository, MockDiseaseInfoRepository, MockImageClassifier,
            },
        },
        health::ports::MockHealthCheckRepository,
        marketplace::ports::{MockCategoryRepository, MockCropListingRepository},
        otp::ports::{MockOtpRepository, MockSmsSender},
        storage::{entities::PresignedUrl, ports::MockObjectStoragePort},
        user::{
            entities::PreferredLanguage,
            ports::{MockPasswordHasher, MockTokenIssuer, MockUserRepository},
        },
    };

    type TestService = Service<
        MockUserRepository,
        MockOtpRepository,
        MockDetectionRecordRepository,
        MockDiseaseInfoRepository,
        MockHealthCheckRepository,
        MockCropListingRepository,
        MockCategoryRepository,
        MockPasswordHasher,
        MockImageClassifier,
        MockSmsSender,
        MockObjectStoragePort,
        MockTokenIssuer,
    >;

    fn service(
        detection_repository: MockDetectionRecordRepository,
        disease_info_repository: MockDiseaseInfoRepository,
        classifier: MockImageClassifier,
        object_storage: MockObjectStoragePort,
    ) -> TestService {
        Service::new(
            MockUserRepository::new(),
            MockOtpRepository::new(),
            detection_repository,
            disease_info_repository,
            MockHealthCheckRepository::new(),
            MockCropListingRepository::new(),
            MockCategoryRepository::new(),
            MockPasswordHasher::new(),
            classifier,
            MockSmsSender::new(),
            object_storage,
            MockTokenIssuer::new(),
            test_config(),
        )
    }

    fn farmer() -> User {
        User::new(
            "+9779800000000".into(),
            "$argon2id$stub".into(),
            "Sita".into(),
            "Sharma".into(),
            None,
            None,
            None,
            None,
            None,
            PreferredLanguage::Np,
        )
    }

    fn classifier_predicting(scores: Vec<f32>) -> MockImageClassifier {
        let mut classifier = MockImageClassifier::new();
        classifier
            .expect_predict()
            .returning(move |_| {
                let scores = scores.clone();
                Box::pin(async move { Ok(scores) })
            });
        classifier.expect_labels().returning(|| {
            vec![
                "0 Tomato_Late_blight".to_string(),
                "1 Tomato_healthy".to_string(),
                "2 Potato_Early_blight".to_string(),
            ]
        });
        classifier
    }

    fn storage_accepting_uploads() -> MockObjectStoragePort {
        let mut object_storage = MockObjectStoragePort::new();
        object_storage
            .expect_put_object()
            .returning(|_, _, _| Box::pin(async { Ok(()) }));
        object_storage.expect_presign_get_url().returning(|key, _| {
            let url = format!("https://minio.local/smartkheti/{key}?sig=abc");
            Box::pin(async move {
                Ok(PresignedUrl {
                    url,
                    expires_in_seconds: 3600,
                })
            })
        });
        object_storage
    }

    fn detect_input() -> DetectDiseaseInput {
        DetectDiseaseInput {
            image_data: vec![0u8; 16],
            content_type: "image/jpeg".to_string(),
        }
    }

    fn late_blight_info() -> DiseaseInfo {
        DiseaseInfo {
            id: Uuid::new_v4(),
            crop: "Tomato".into(),
            name: "Late_blight".into(),
            short_remedy: "Remove affected leaves".into(),
            treatment: "Spray a copper-based fungicide".into(),
            recheck_advice: "Recheck after one week".into(),
            is_healthy: false,
        }
    }

    #[tokio::test]
    async fn detect_creates_one_record_with_cleaned_label() {
        let mut detection_repository = MockDetectionRecordRepository::new();
        let mut disease_info_repository = MockDiseaseInfoRepository::new();

        detection_repository
            .expect_create()
            .times(1)
            .withf(|record| record.detected_disease == "Tomato_Late_blight")
            .returning(|record| Box::pin(async move { Ok(record) }));
        disease_info_repository
            .expect_find_by_crop_and_name()
            .withf(|crop, name| crop == "Tomato" && name == "Late_blight")
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let service = service(
            detection_repository,
            disease_info_repository,
            classifier_predicting(vec![0.8, 0.1, 0.1]),
            storage_accepting_uploads(),
        );

        let outcome = service.detect_disease(farmer(), detect_input()).await.unwrap();

        assert_eq!(outcome.record.detected_disease, "Tomato_Late_blight");
        assert!(matches!(outcome.diagnosis, Diagnosis::Unknown { .. }));
    }

    #[tokio::test]
    async fn healthy_match_returns_recheck_advice_only() {
        let mut detection_repository = MockDetectionRecordRepository::new();
        let mut disease_info_repository = MockDiseaseInfoRepository::new();

        detection_repository
            .expect_create()
            .returning(|record| Box::pin(async move { Ok(record) }));
        disease_info_repository
            .expect_find_by_crop_and_name()
            .returning(|_, _| {
                Box::pin(async {
                    Ok(Some(DiseaseInfo {
                        id: Uuid::new_v4(),
                        crop: "Tomato".into(),
                        name: "healthy".into(),
                        short_remedy: String::new(),
                        treatment: String::new(),
                        recheck_advice: "Scan again in two weeks".into(),
                        is_healthy: true,
                    }))
                })
            });
        disease_info_repository.expect_get_products().times(0);

        let service = service(
            detection_repository,
            disease_info_repository,
            classifier_predicting(vec![0.1, 0.8, 0.1]),
            storage_accepting_uploads(),
        );

        let outcome = service.detect_disease(farmer(), detect_input()).await.unwrap();

        match outcome.diagnosis {
            Diagnosis::Healthy {
                detected_disease,
                recheck_advice,
                ..
            } => {
                assert_eq!(detected_disease, "Healthy");
                assert_eq!(recheck_advice, "Scan again in two weeks");
            }
            other => panic!("expected healthy diagnosis, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn diseased_match_includes_absolute_product_urls() {
        let info = late_blight_info();
        let disease_id = info.id;

        let mut detection_repository = MockDetectionRecordRepository::new();
        let mut disease_info_repository = MockDiseaseInfoRepository::new();

        detection_repository
            .expect_create()
            .returning(|record| Box::pin(async move { Ok(record) }));
        disease_info_repository
            .expect_find_by_crop_and_name()
            .returning(move |_, _| {
                let info = info.clone();
                Box::pin(async move { Ok(Some(info)) })
            });
        disease_info_repository
            .expect_get_products()
            .returning(move |_| {
                Box::pin(async move {
                    Ok(vec![Product {
                        id: Uuid::new_v4(),
                        disease_id,
                        name: "Copper fungicide".into(),
                        image_key: "products/copper.jpg".into(),
                    }])
                })
            });

        let service = service(
            detection_repository,
            disease_info_repository,
            classifier_predicting(vec![0.8, 0.1, 0.1]),
            storage_accepting_uploads(),
        );

        let outcome = service.detect_disease(farmer(), detect_input()).await.unwrap();

        match outcome.diagnosis {
            Diagnosis::Diseased { products, .. } => {
                assert_eq!(products.len(), 1);
                assert!(products[0].image_url.starts_with("https://"));
            }
            other => panic!("expected diseased diagnosis, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn decode_failure_persists_nothing() {
        let mut detection_repository = MockDetectionRecordRepository::new();
        detection_repository.expect_create().times(0);

        let mut classifier = MockImageClassifier::new();
        classifier
            .expect_predict()
            .returning(|_| {
                Box::pin(async { Err(CoreError::ImageDecode("not an image".to_string())) })
            });

        let mut object_storage = MockObjectStoragePort::new();
        object_storage.expect_put_object().times(0);

        let service = service(
            detection_repository,
            MockDiseaseInfoRepository::new(),
            classifier,
            object_storage,
        );

        let result = service.detect_disease(farmer(), detect_input()).await;

        assert!(matches!(result, Err(CoreError::ImageDecode(_))));
    }

    #[tokio::test]
    async fn predicted_index_outside_label_list_is_shape_mismatch() {
        let mut classifier = MockImageClassifier::new();
        classifier
            .expect_predict()
            .returning(|_| Box::pin(async { Ok(vec![0.1, 0.1, 0.1, 0.7]) }));
        classifier
            .expect_labels()
            .returning(|| vec!["0 Tomato_Late_blight".to_string()]);

        let mut detection_repository = MockDetectionRecordRepository::new();
        detection_repository.expect_create().times(0);

        let service = service(
            detection_repository,
            MockDiseaseInfoRepository::new(),
            classifier,
            MockObjectStoragePort::new(),
        );

        let result = service.detect_disease(farmer(), detect_input()).await;

        assert!(matches!(result, Err(CoreError::ShapeMismatch(_))));
    }

    #[tokio::test]
    async fn all_detections_rejects_non_staff() {
        let service = service(
            MockDetectionRecordRepository::new(),
            MockDiseaseInfoRepository::new(),
            MockImageClassifier::new(),
            MockObjectStoragePort::new(),
        );

        let result = service.get_all_detections(farmer()).await;

        assert_eq!(result.unwrap_err(), CoreError::Forbidden);
    }

    #[tokio::test]
    async fn all_detections_allows_staff() {
        let mut detection_repository = MockDetectionRecordRepository::new();
        detection_repository
            .expect_get_all()
            .returning(|| Box::pin(async { Ok(vec![]) }));

        let service = service(
            detection_repository,
            MockDiseaseInfoRepository::new(),
            MockImageClassifier::new(),
            MockObjectStoragePort::new(),
        );

        let mut staff = farmer();
        staff.is_staff = true;

        assert!(service.get_all_detections(staff).await.unwrap().is_empty());
    }
}
