use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Reference entry for a (crop, disease) pair, seeded administratively and
/// read-only from the inference pipeline. The pair is unique under
/// case-insensitive comparison (enforced by a functional index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DiseaseInfo {
    pub id: Uuid,
    pub crop: String,
    pub name: String,
    pub short_remedy: String,
    pub treatment: String,
    pub recheck_advice: String,
    pub is_healthy: bool,
}

/// A treatment product owned by one DiseaseInfo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub disease_id: Uuid,
    pub name: String,
    pub image_key: String,
}
