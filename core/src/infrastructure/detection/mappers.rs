use crate::{
    domain::detection::entities::{DetectionRecord, DiseaseInfo, Product},
    entity::{detection_records, disease_infos, products},
};

impl From<&detection_records::Model> for DetectionRecord {
    fn from(model: &detection_records::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            image_key: model.image_key.clone(),
            detected_disease: model.detected_disease.clone(),
            detected_at: model.detected_at.to_utc(),
        }
    }
}

impl From<detection_records::Model> for DetectionRecord {
    fn from(model: detection_records::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&disease_infos::Model> for DiseaseInfo {
    fn from(model: &disease_infos::Model) -> Self {
        Self {
            id: model.id,
            crop: model.crop.clone(),
            name: model.name.clone(),
            short_remedy: model.short_remedy.clone(),
            treatment: model.treatment.clone(),
            recheck_advice: model.recheck_advice.clone(),
            is_healthy: model.is_healthy,
        }
    }
}

impl From<disease_infos::Model> for DiseaseInfo {
    fn from(model: disease_infos::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&products::Model> for Product {
    fn from(model: &products::Model) -> Self {
        Self {
            id: model.id,
            disease_id: model.disease_id,
            name: model.name.clone(),
            image_key: model.image_key.clone(),
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self::from(&model)
    }
}
