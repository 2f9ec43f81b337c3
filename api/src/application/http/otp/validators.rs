use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RequestOtpValidator {
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct VerifyOtpValidator {
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[validate(length(equal = 6, message = "otp must be 6 digits"))]
    pub otp: String,

    #[validate(length(min = 6, message = "new_password must be at least 6 characters"))]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_requires_all_three_fields() {
        let validator = VerifyOtpValidator {
            phone: String::new(),
            otp: "12345".into(),
            new_password: "123".into(),
        };

        let errors = validator.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("phone"));
        assert!(fields.contains_key("otp"));
        assert!(fields.contains_key("new_password"));
    }

    #[test]
    fn verify_accepts_a_complete_payload() {
        let validator = VerifyOtpValidator {
            phone: "+9779800000000".into(),
            otp: "123456".into(),
            new_password: "tomato123".into(),
        };

        assert!(validator.validate().is_ok());
    }
}
