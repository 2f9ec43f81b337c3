use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::detection::entities::DetectionRecord;

#[derive(Debug, Clone)]
pub struct DetectDiseaseInput {
    pub image_data: Vec<u8>,
    pub content_type: String,
}

/// Enrichment outcome for a detection. The three variants carry exactly the
/// fields the response may expose: a healthy match never includes remedy,
/// treatment or products.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub enum Diagnosis {
    Unknown {
        detected_disease: String,
        crop: String,
        message: String,
    },
    Healthy {
        detected_disease: String,
        crop: String,
        message: String,
        recheck_advice: String,
    },
    Diseased {
        detected_disease: String,
        crop: String,
        short_remedy: String,
        treatment: String,
        recheck_advice: String,
        products: Vec<ProductInfo>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductInfo {
    pub name: String,
    /// Absolute URL (scheme and host included).
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DetectionOutcome {
    pub record: DetectionRecord,
    pub diagnosis: Diagnosis,
}

/// A history row with the stored image resolved to a fetchable URL. The URL
/// is exposed under the `image` key, matching the upload field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DetectionHistoryEntry {
    pub id: Uuid,
    pub detected_disease: String,
    pub detected_at: DateTime<Utc>,
    #[serde(rename = "image")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_entry_exposes_its_url_under_the_image_key() {
        let entry = DetectionHistoryEntry {
            id: Uuid::nil(),
            detected_disease: "Tomato_Late_blight".to_string(),
            detected_at: Utc::now(),
            image_url: "https://minio.local/smartkheti/detections/abc.jpg".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();

        assert!(json.get("image").is_some());
        assert!(json.get("image_url").is_none());
    }
}
