use crate::{domain::otp::entities::OtpRequest, entity::otp_requests};

impl From<&otp_requests::Model> for OtpRequest {
    fn from(model: &otp_requests::Model) -> Self {
        Self {
            id: model.id,
            phone: model.phone.clone(),
            code: model.code.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<otp_requests::Model> for OtpRequest {
    fn from(model: otp_requests::Model) -> Self {
        Self::from(&model)
    }
}
