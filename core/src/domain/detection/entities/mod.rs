mod detection_record;
mod disease_info;

pub use detection_record::DetectionRecord;
pub use disease_info::{DiseaseInfo, Product};
