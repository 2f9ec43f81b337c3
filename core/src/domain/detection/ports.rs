use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::{
        entities::{DetectionRecord, DiseaseInfo, Product},
        value_objects::{DetectDiseaseInput, DetectionHistoryEntry, DetectionOutcome},
    },
    user::entities::User,
};

/// Repository trait for detection history
#[cfg_attr(test, mockall::automock)]
pub trait DetectionRecordRepository: Send + Sync {
    fn create(
        &self,
        record: DetectionRecord,
    ) -> impl Future<Output = Result<DetectionRecord, CoreError>> + Send;

    /// Caller's records, newest first.
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<DetectionRecord>, CoreError>> + Send;

    /// Every record, newest first. Authorization happens in the service.
    fn get_all(&self) -> impl Future<Output = Result<Vec<DetectionRecord>, CoreError>> + Send;
}

/// Repository trait for the disease reference table
#[cfg_attr(test, mockall::automock)]
pub trait DiseaseInfoRepository: Send + Sync {
    /// Case-insensitive exact match on (crop, name). Should duplicates exist
    /// the row with the lowest id wins.
    fn find_by_crop_and_name(
        &self,
        crop: String,
        name: String,
    ) -> impl Future<Output = Result<Option<DiseaseInfo>, CoreError>> + Send;

    fn get_products(
        &self,
        disease_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;
}

/// The fixed-shape classifier behind the inference pipeline. Loaded once at
/// startup and shared read-only across requests; `predict` blocks the
/// calling worker for the duration of preprocessing plus inference.
#[cfg_attr(test, mockall::automock)]
pub trait ImageClassifier: Send + Sync {
    /// Raw score vector for a decodable image. Decode failures surface as
    /// `CoreError::ImageDecode`, model failures as `CoreError::Inference`.
    fn predict(
        &self,
        image_data: &[u8],
    ) -> impl Future<Output = Result<Vec<f32>, CoreError>> + Send;

    /// Ordered label list; index order matches the output vector order.
    fn labels(&self) -> Vec<String>;
}

/// Service trait for the disease-detection pipeline
#[cfg_attr(test, mockall::automock)]
pub trait DetectionService: Send + Sync {
    fn detect_disease(
        &self,
        user: User,
        input: DetectDiseaseInput,
    ) -> impl Future<Output = Result<DetectionOutcome, CoreError>> + Send;

    fn get_detection_history(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Vec<DetectionHistoryEntry>, CoreError>> + Send;

    /// Staff-only listing of every user's records.
    fn get_all_detections(
        &self,
        user: User,
    ) -> impl Future<Output = Result<Vec<DetectionHistoryEntry>, CoreError>> + Send;
}
