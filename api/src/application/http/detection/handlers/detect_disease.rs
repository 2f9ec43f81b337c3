use axum::{
    Extension,
    extract::{Multipart, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use smartkheti_core::domain::{
    detection::{
        ports::DetectionService,
        value_objects::{DetectDiseaseInput, DetectionOutcome, Diagnosis, ProductInfo},
    },
    user::entities::User,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Flat response shape; absent fields are omitted rather than null, so the
/// healthy and unknown cases never carry treatment keys.
#[derive(Debug, Serialize, ToSchema)]
pub struct DetectDiseaseResponse {
    pub id: Uuid,
    pub detected_disease: String,
    pub crop: String,
    pub detected_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_remedy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recheck_advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductInfo>>,
}

impl From<DetectionOutcome> for DetectDiseaseResponse {
    fn from(outcome: DetectionOutcome) -> Self {
        let mut response = DetectDiseaseResponse {
            id: outcome.record.id,
            detected_disease: String::new(),
            crop: String::new(),
            detected_at: outcome.record.detected_at,
            message: None,
            short_remedy: None,
            treatment: None,
            recheck_advice: None,
            products: None,
        };

        match outcome.diagnosis {
            Diagnosis::Unknown {
                detected_disease,
                crop,
                message,
            } => {
                response.detected_disease = detected_disease;
                response.crop = crop;
                response.message = Some(message);
            }
            Diagnosis::Healthy {
                detected_disease,
                crop,
                message,
                recheck_advice,
            } => {
                response.detected_disease = detected_disease;
                response.crop = crop;
                response.message = Some(message);
                response.recheck_advice = Some(recheck_advice);
            }
            Diagnosis::Diseased {
                detected_disease,
                crop,
                short_remedy,
                treatment,
                recheck_advice,
                products,
            } => {
                response.detected_disease = detected_disease;
                response.crop = crop;
                response.short_remedy = Some(short_remedy);
                response.treatment = Some(treatment);
                response.recheck_advice = Some(recheck_advice);
                response.products = Some(products);
            }
        }

        response
    }
}

#[utoipa::path(
    post,
    path = "/detect",
    tag = "detection",
    summary = "Detect crop disease from a leaf photo",
    description = "Runs the classifier on the uploaded image, records the result and returns remedy information when available",
    responses(
        (status = 200, body = DetectDiseaseResponse),
        (status = 400, description = "Missing or invalid image field"),
        (status = 401, description = "Unauthenticated")
    ),
)]
pub async fn detect_disease(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    mut multipart: Multipart,
) -> Result<Response<DetectDiseaseResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut content_type = "image/jpeg".to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            if let Some(ct) = field.content_type() {
                content_type = ct.to_string();
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

            if data.len() > MAX_IMAGE_SIZE {
                return Err(ApiError::BadRequest(format!(
                    "Image too large. Max size is {} bytes",
                    MAX_IMAGE_SIZE
                )));
            }

            image_data = Some(data.to_vec());
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::field_error("image", "This field is required."))?;

    let outcome = state
        .service
        .detect_disease(
            user,
            DetectDiseaseInput {
                image_data,
                content_type,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DetectDiseaseResponse::from(outcome)))
}
