use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One classification event. Created exactly once per successful inference
/// and never mutated afterwards; `detected_at` is server assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DetectionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_key: String,
    pub detected_disease: String,
    pub detected_at: DateTime<Utc>,
}

impl DetectionRecord {
    pub fn new(user_id: Uuid, image_key: String, detected_disease: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            image_key,
            detected_disease,
            detected_at: now,
        }
    }
}
